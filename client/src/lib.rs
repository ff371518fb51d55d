//! # taste-client
//!
//! Leptos + WASM frontend for the Taste recipe and restaurant app.
//!
//! The crate centers on the session gate: `state::session` owns the
//! persisted credential, `state::auth` exposes it reactively, and
//! `util::auth` decides which views may render. Pages are thin consumers.
//! Built with `hydrate` for the browser and `ssr` for the host binary.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
