//! Marksync — a live-syncing personal bookmark manager.
//!
//! A WebAssembly single-page client over a hosted backend platform: OAuth
//! sign-in through the platform's auth service, bookmark rows in its
//! relational table, and a realtime channel whose change notifications
//! trigger full list refetches so every open tab converges on server state.
//!
//! The `web` feature enables the browser runtime (rendering, HTTP, the
//! realtime socket); without it the crate exposes the pure logic the test
//! suite exercises on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
