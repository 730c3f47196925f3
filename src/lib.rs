//! # notifications-client
//!
//! Leptos + WASM single-page client for the notifications service: users
//! log in with their email, browse their notifications, and edit which
//! channels (email / SMS / push) they want to see.
//!
//! This crate contains pages, components, application state, the typed API
//! client, the query cache that de-duplicates and refreshes fetches, and
//! the health poller gating the UI on API availability.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
