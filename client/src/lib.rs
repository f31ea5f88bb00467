//! # client
//!
//! Leptos + WASM frontend for the course planner.
//!
//! This crate contains the app shell, pages, components, application state,
//! and the browser adapters that bind the `theme` resolver to the DOM. Native
//! builds (SSR and tests) compile without the `hydrate` feature and see only
//! detached browser adapters.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
