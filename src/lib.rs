//! TTPU CRM Dashboard
//!
//! Administrative dashboard for the university's multi-channel
//! application-intake system, built with Leptos and WebAssembly. Every page
//! is a thin view over the CRM REST API.

#![recursion_limit = "2048"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
