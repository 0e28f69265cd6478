//! # client
//!
//! Leptos + WASM frontend for the Verdance ESG points platform.
//!
//! This crate contains pages, components, reactive state, and the browser
//! implementations of the `esg-api` seams (fetch transport, local-storage
//! token store, window navigation). All API semantics live in `esg-api`;
//! this crate only binds them to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
