//! Network layer for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` implements the session crate's `Transport` seam over the
//! browser `fetch` API. Request shapes and response handling live in the
//! session crate; this module only moves bytes.

pub mod transport;
