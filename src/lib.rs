// lib.rs - Root module for the deals_storefront library
//
// The library holds everything: shared models and view-models, the Leptos
// UI, and the REST backend. Binaries in src/bin pick what they need through
// cargo features.

/// Sample catalog used by tests and by the backend's empty-store seed
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrate the server-rendered storefront
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // tracing events are forwarded to `log` while no subscriber is set,
    // so this routes them to the browser console
    console_log::init_with_level(log::Level::Info).ok();
    leptos::mount::hydrate_body(web_app::App);
}
