//! # rating-console
//!
//! Leptos + WASM frontend for the credit risk rating platform.
//!
//! This crate contains the login-gated dashboard shell: the auth session
//! manager, the route guard, the dashboard page, and the thin REST layer that
//! talks to the rating backend. The `ssr` feature adds the Axum host binary
//! that server-renders the shell; the `hydrate` feature builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    log::info!("hydrating rating console");
    leptos::mount::hydrate_body(app::App);
}
