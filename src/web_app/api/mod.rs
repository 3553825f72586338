// web_app/api/mod.rs - REST backend for the storefront
//
// - config.rs: environment configuration
// - store.rs: ProductStore trait, validation and the in-memory store
// - db.rs / queries.rs: PostgreSQL and SQLite pools, schema and stores
// - handlers.rs: actix-web routes

pub mod config;
pub mod db;
pub mod handlers;
pub mod queries;
pub mod store;

pub use config::{ApiConfig, StorageKind};
pub use handlers::{configure, cors_headers, AppState};
pub use store::{MemoryProductStore, NewProduct, ProductStore, StoreError};
