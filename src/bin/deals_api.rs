// REST backend for the deals storefront
//
// This binary starts the JSON API with:
// - Actix-web for HTTP serving
// - PostgreSQL or SQLite storage picked from DATABASE_URL (a local SQLite
//   file by default, `memory` for a throwaway store)
// - Optional sample deals for an empty store

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use deals_storefront::fixtures;
use deals_storefront::web_app::api::queries::{PgProductStore, SqliteProductStore};
use deals_storefront::web_app::api::{
    configure, cors_headers, db, ApiConfig, AppState, MemoryProductStore, NewProduct,
    ProductStore, StorageKind,
};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables before reading RUST_LOG
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();
    if config.uses_default_password() {
        tracing::warn!("ADMIN_PASSWORD is not set; using the built-in default password");
    }

    let store = open_store(&config).await?;

    if config.seed_sample_deals {
        if let Err(e) = seed_store(store.as_ref()).await {
            tracing::error!("Failed to seed sample deals: {}", e);
        }
    }

    let state = web::Data::new(AppState::new(store, config.admin_password.clone()));
    let addr = config.bind_addr();

    tracing::info!("Backend listening on http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .configure(configure)
    })
    .bind(addr)?
    .run()
    .await
}

async fn open_store(config: &ApiConfig) -> std::io::Result<Arc<dyn ProductStore>> {
    let database_url = config.database_url.as_str();
    match config.storage() {
        Some(StorageKind::Postgres) => {
            let pool = db::create_pool(database_url)
                .await
                .map_err(std::io::Error::other)?;
            db::init_schema(&pool).await.map_err(std::io::Error::other)?;

            tracing::info!("Connected to PostgreSQL");
            Ok(Arc::new(PgProductStore::new(pool)))
        }
        Some(StorageKind::Sqlite) => {
            let pool = db::create_sqlite_pool(database_url)
                .await
                .map_err(std::io::Error::other)?;
            db::init_sqlite_schema(&pool)
                .await
                .map_err(std::io::Error::other)?;

            tracing::info!("Using SQLite database {}", database_url);
            Ok(Arc::new(SqliteProductStore::new(pool)))
        }
        Some(StorageKind::Memory) => {
            tracing::warn!("Products are kept in memory only and are lost on restart");
            Ok(Arc::new(MemoryProductStore::new()))
        }
        None => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Unsupported DATABASE_URL '{}'", database_url),
        )),
    }
}

async fn seed_store(store: &dyn ProductStore) -> anyhow::Result<()> {
    let existing = store.list().await?.len();
    if existing > 0 {
        tracing::info!("Store already contains {} products, skipping seed.", existing);
        return Ok(());
    }

    tracing::info!("Seeding sample deals...");
    for draft in fixtures::sample_drafts() {
        store.insert(NewProduct::from_draft(draft)?).await?;
    }
    tracing::info!("Sample deals seeded.");
    Ok(())
}
