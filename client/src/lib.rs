//! # userdesk
//!
//! Leptos + WASM frontend for managing the users of a remote REST API.
//!
//! This crate contains pages, components, application state, and network
//! types. The session guard lives in `util::auth` and `components::require_auth`;
//! the paginated listing controller lives in `state::listing`. The
//! `userdesk-server` crate hosts it with SSR.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
