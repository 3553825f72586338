// web_app/api/store.rs - Product storage seam
//
// Handlers talk to a `ProductStore`. PostgreSQL backs it in production
// (queries.rs); `MemoryProductStore` is used without a DATABASE_URL and in
// tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::web_app::model::{Product, ProductDraft, DEFAULT_CATEGORY};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Invalid(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A draft that passed validation and can be stored
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub image_url: String,
    pub link: String,
    pub price: String,
    pub category: String,
    pub description: Option<String>,
}

impl NewProduct {
    /// Validate a submitted draft.
    ///
    /// Title, image URL, link and price are required. A blank category
    /// becomes "General"; a blank description is dropped. Column limits
    /// match the table definition in db.rs.
    pub fn from_draft(draft: ProductDraft) -> Result<Self, StoreError> {
        let title = required("title", draft.title, 200)?;
        let image_url = required("image_url", draft.image_url, 500)?;
        let link = required("link", draft.link, 500)?;
        let price = required("price", draft.price, 50)?;

        let category = match draft.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            category => within("category", category.to_string(), 100)?,
        };

        let description = Some(draft.description.trim().to_string()).filter(|d| !d.is_empty());

        Ok(Self {
            title,
            image_url,
            link,
            price,
            category,
            description,
        })
    }

    fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            image_url: self.image_url,
            link: self.link,
            price: self.price,
            category: Some(self.category),
            description: self.description,
        }
    }
}

fn required(field: &str, value: String, max_len: usize) -> Result<String, StoreError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(StoreError::Invalid(format!("'{field}' is required")));
    }
    within(field, value, max_len)
}

fn within(field: &str, value: String, max_len: usize) -> Result<String, StoreError> {
    if value.chars().count() > max_len {
        return Err(StoreError::Invalid(format!(
            "'{field}' must be at most {max_len} characters"
        )));
    }
    Ok(value)
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, newest first
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Store a product and return it with its assigned id
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Remove a product; `StoreError::NotFound` when the id is unknown
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    last_id: i64,
    products: Vec<Product>,
}

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing products; new ids continue after the largest one
    pub fn with_products(products: Vec<Product>) -> Self {
        let last_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(MemoryInner { last_id, products }),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        let mut products = inner.products.clone();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let product = product.into_product(inner.last_id);
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            image_url: "https://img.example/a.jpg".to_string(),
            link: "https://shop.example/a".to_string(),
            price: "₹100".to_string(),
            category: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_validation_defaults() {
        let product = NewProduct::from_draft(draft("  Desk Lamp ")).unwrap();
        assert_eq!(product.title, "Desk Lamp");
        assert_eq!(product.category, "General");
        assert!(product.description.is_none());
    }

    #[test]
    fn test_validation_rejects_missing_fields() {
        let mut missing_link = draft("Lamp");
        missing_link.link = " ".to_string();
        match NewProduct::from_draft(missing_link) {
            Err(StoreError::Invalid(msg)) => assert!(msg.contains("link")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_long_price() {
        let mut long_price = draft("Lamp");
        long_price.price = "9".repeat(51);
        assert!(matches!(
            NewProduct::from_draft(long_price),
            Err(StoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_store_lists_newest_first() {
        let store = MemoryProductStore::new();
        for title in ["First", "Second", "Third"] {
            store
                .insert(NewProduct::from_draft(draft(title)).unwrap())
                .await
                .unwrap();
        }

        let titles: Vec<String> = store.list().await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn test_memory_store_delete() {
        let store = MemoryProductStore::new();
        let product = store
            .insert(NewProduct::from_draft(draft("Lamp")).unwrap())
            .await
            .unwrap();

        store.delete(product.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(
            store.delete(product.id).await,
            Err(StoreError::NotFound(id)) if id == product.id
        ));
    }

    #[tokio::test]
    async fn test_ids_continue_after_existing_products() {
        let existing = NewProduct::from_draft(draft("Old")).unwrap().into_product(41);
        let store = MemoryProductStore::with_products(vec![existing]);
        let created = store
            .insert(NewProduct::from_draft(draft("New")).unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, 42);
    }
}
