//! # partyn-client
//!
//! Leptos + WASM front end for the Partyn event listing.
//!
//! Contains the auth store and route guards, the backend and identity-provider
//! HTTP clients, and the pages and components. The SSR host compiles this
//! crate with the `ssr` feature; the browser bundle uses `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
