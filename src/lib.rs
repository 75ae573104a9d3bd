//! # dashboard
//!
//! Leptos + WASM student dashboard. Shows the signed-in user's name and
//! email and sends visitors without a session to `login.html`.
//!
//! Identity comes from Firebase Authentication and the display name from a
//! Cloud Firestore profile document. Both are reached through the REST APIs
//! in `net`; the page logic in `session` only sees the port traits, so it
//! runs unchanged against test doubles.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
