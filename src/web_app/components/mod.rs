// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, EmptyState, inputs)
// - search.rs: Storefront filter controls (SearchBar, CategoryFilter)
// - product.rs: Product display components (ProductCard, ProductGrid, ProductRow)
// - draft.rs: Admin draft form and password input

pub mod common;
pub mod draft;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use draft::*;
pub use product::*;
pub use search::*;
