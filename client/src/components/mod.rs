//! Reusable UI components.

pub mod protected_route;
