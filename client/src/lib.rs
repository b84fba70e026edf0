//! # client
//!
//! Leptos + WASM frontend for the data validation workspace.
//!
//! This crate contains the page, components, application state, and network
//! types. The server crate reuses `net::types` for the suggestion endpoint and
//! `app` for SSR.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
