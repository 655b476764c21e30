//! # client
//!
//! Leptos + WASM frontend for Beacon: the public marketing shell, the
//! signed-out-only sign-in flow behind the auth gate, and the signed-in
//! dashboard.
//!
//! This crate contains pages, components, session state, network types and
//! REST helpers. The server crate renders `app::App` with the `ssr` feature;
//! the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
