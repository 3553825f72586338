// web_app/mod.rs - Root module for the deals storefront
//
// Architecture:
// - model/: Shared data types (storefront, admin panel and backend)
// - client.rs: HTTP client for the REST API (native and WASM)
// - catalog.rs / admin.rs: View-models behind the two pages
// - dialogs.rs: Blocking alert / confirm
// - api/: REST backend handlers and storage (backend only)
// - components/, pages/, app.rs: Leptos UI (SSR and hydrate)

pub mod model;

pub mod client;

pub mod catalog;

pub mod admin;

pub mod dialogs;

// REST backend served by the `deals_api` binary
#[cfg(feature = "backend")]
pub mod api;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
