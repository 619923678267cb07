//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only piece of shared state. It is created once in
//! `App` and passed to each page as a prop; nothing is looked up from
//! context.

pub mod auth;
