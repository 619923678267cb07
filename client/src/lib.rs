//! # client
//!
//! Leptos + WASM frontend for the workout planner: login/registration and the
//! protected home screen for workouts and routines.
//!
//! The session core (store, guard, API client) lives in the `session` crate;
//! this crate supplies the browser pieces: a `gloo-net` transport,
//! `localStorage` persistence, signal-backed session state and the views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
