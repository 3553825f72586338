// web_app/api/queries.rs - SQL product stores
//
// Plain SQL through sqlx, once for PostgreSQL and once for SQLite. The
// affiliate URL is stored as `affiliate_link` and exposed as `link`.

use async_trait::async_trait;
use sqlx::{PgPool, SqlitePool};

use super::store::{NewProduct, ProductStore, StoreError};
use crate::web_app::model::Product;

/// Helper struct for mapping SQL rows to Product
#[derive(Clone, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    image_url: String,
    affiliate_link: String,
    price: String,
    category: Option<String>,
    description: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            image_url: row.image_url,
            link: row.affiliate_link,
            price: row.price,
            category: row.category,
            description: row.description,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, image_url, affiliate_link, price, category, description
            FROM products
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (title, image_url, affiliate_link, price, category, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, image_url, affiliate_link, price, category, description
            "#,
        )
        .bind(&product.title)
        .bind(&product.image_url)
        .bind(&product.link)
        .bind(&product.price)
        .bind(&product.category)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

/// Products in a SQLite file, the backend's default storage
#[derive(Clone, Debug)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, image_url, affiliate_link, price, category, description
            FROM products
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (title, image_url, affiliate_link, price, category, description)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, image_url, affiliate_link, price, category, description
            "#,
        )
        .bind(&product.title)
        .bind(&product.image_url)
        .bind(&product.link)
        .bind(&product.price)
        .bind(&product.category)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
