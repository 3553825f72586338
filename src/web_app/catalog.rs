// web_app/catalog.rs - Home page listing logic
//
// Pure functions behind the storefront grid: category options, the
// search/category filter and the display state. The page component only
// wires these to signals.

use crate::web_app::client::ApiClient;
use crate::web_app::model::Product;

/// Category option that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Category filter options: "All" followed by every distinct category in
/// first-seen order.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        let label = product.category_label();
        if !options.iter().any(|seen| seen == label) {
            options.push(label.to_string());
        }
    }
    options
}

/// Search text plus selected category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Title contains the search text (case-insensitive) and the category
    /// is "All" or equal to the product's category.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        let title_matches = product.title.to_lowercase().contains(&needle);
        let category_matches =
            self.category == ALL_CATEGORIES || self.category == product.category_label();
        title_matches && category_matches
    }

    /// Matching products, in their original order
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

/// What the product area of the home page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogDisplay {
    Loading,
    /// The backend has no products at all
    NoProducts,
    /// Products exist but none pass the filter
    NoMatches,
    Results(Vec<Product>),
}

impl CatalogDisplay {
    pub fn resolve(loading: bool, products: &[Product], filter: &CatalogFilter) -> Self {
        if loading {
            return CatalogDisplay::Loading;
        }
        if products.is_empty() {
            return CatalogDisplay::NoProducts;
        }
        let visible = filter.apply(products);
        if visible.is_empty() {
            CatalogDisplay::NoMatches
        } else {
            CatalogDisplay::Results(visible)
        }
    }
}

/// Fetch the product list for display.
///
/// Failures are logged and produce an empty list; listing errors are never
/// surfaced to shoppers.
pub async fn load_catalog(client: &ApiClient) -> Vec<Product> {
    match client.list_products().await {
        Ok(products) => {
            tracing::info!("Loaded {} products", products.len());
            products
        }
        Err(e) => {
            tracing::error!("Error fetching products: {}", e);
            Vec::new()
        }
    }
}
