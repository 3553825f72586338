// web_app/api/db.rs - Database connection pool setup
//
// Pool creation and the products table for PostgreSQL and SQLite. The table
// is created on start-up when it does not exist yet.

use std::str::FromStr;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

/// Table definition; column limits are mirrored by `NewProduct::from_draft`
pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        image_url VARCHAR(500) NOT NULL,
        affiliate_link VARCHAR(500) NOT NULL,
        price VARCHAR(50) NOT NULL,
        category VARCHAR(100) DEFAULT 'General',
        description TEXT
    )
"#;

/// SQLite flavour of the same table
pub const CREATE_PRODUCTS_TABLE_SQLITE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(200) NOT NULL,
        image_url VARCHAR(500) NOT NULL,
        affiliate_link VARCHAR(500) NOT NULL,
        price VARCHAR(50) NOT NULL,
        category VARCHAR(100) DEFAULT 'General',
        description TEXT
    )
"#;

/// Create a PostgreSQL connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Create the products table if needed
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;
    tracing::info!("Products table ready");
    Ok(())
}

/// Open a SQLite pool, creating the database file if it is missing
pub async fn create_sqlite_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Each `sqlite::memory:` connection is its own database
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn init_sqlite_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE_SQLITE).execute(pool).await?;
    tracing::info!("Products table ready");
    Ok(())
}
