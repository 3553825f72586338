// web_app/api/config.rs - Backend configuration
//
// Read from the process environment after `dotenv` has loaded `.env`.

use std::env;

/// Port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 5000;

/// Admin password used when `ADMIN_PASSWORD` is unset
pub const DEFAULT_ADMIN_PASSWORD: &str = "my_super_secret_password_123";

/// SQLite file in the working directory, used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";

/// `DATABASE_URL` value that keeps products in process memory
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Where products are stored, chosen from the `DATABASE_URL` scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Sqlite,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
    pub admin_password: String,
    /// `postgres://`, `sqlite:` or `memory`
    pub database_url: String,
    /// Insert the sample catalog into an empty store on start-up
    pub seed_sample_deals: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|password| !password.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let seed_sample_deals = lookup("SEED_SAMPLE_DEALS")
            .map(|flag| matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            port,
            admin_password,
            database_url,
            seed_sample_deals,
        }
    }

    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    /// `None` when the URL scheme is not one the backend can open
    pub fn storage(&self) -> Option<StorageKind> {
        let url = self.database_url.as_str();
        if url == MEMORY_DATABASE_URL {
            Some(StorageKind::Memory)
        } else if url.starts_with("sqlite:") {
            Some(StorageKind::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(StorageKind::Postgres)
        } else {
            None
        }
    }

    pub fn bind_addr(&self) -> (&'static str, u16) {
        ("0.0.0.0", self.port)
    }
}
