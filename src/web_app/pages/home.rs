// web_app/pages/home.rs - Storefront listing page
//
// Fetches the product list once on mount, then filters it client-side by
// title search and category.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::web_app::catalog::{self, CatalogDisplay, CatalogFilter, ALL_CATEGORIES};
use crate::web_app::client::ApiClient;
use crate::web_app::components::*;
use crate::web_app::model::Product;

/// Public deals page
#[component]
pub fn HomePage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_string());

    // Effects only run in the browser, so this is the "on mount" fetch
    Effect::new(move |_| {
        let client = ApiClient::default();
        spawn_local(async move {
            let fetched = catalog::load_catalog(&client).await;
            products.set(fetched);
            loading.set(false);
        });
    });

    let category_options = Signal::derive(move || products.with(|p| catalog::category_options(p)));

    let display = Signal::derive(move || {
        let filter = CatalogFilter::new(query.get(), category.get());
        products.with(|p| CatalogDisplay::resolve(loading.get(), p, &filter))
    });

    let visible = Signal::derive(move || match display.get() {
        CatalogDisplay::Results(found) => found,
        _ => Vec::new(),
    });

    view! {
        <div class="container mx-auto px-4 pb-10 pt-6">
            <div class="text-center mb-10">
                <h1 class="text-4xl font-extrabold text-gray-900 mb-2">"Today's Top Deals"</h1>
                <p class="text-gray-500">"Hand-picked tech, fashion, and home gear."</p>
            </div>

            <section class="flex flex-col gap-4 mb-8">
                <SearchBar query=query />
                <CategoryFilter options=category_options selected=category />
            </section>

            {move || match display.get() {
                CatalogDisplay::Loading => view! {
                    <Loading message="Loading deals..." />
                }.into_any(),
                CatalogDisplay::NoProducts => view! {
                    <EmptyState title="No products yet." hint="Check back soon for new deals!" />
                }.into_any(),
                CatalogDisplay::NoMatches => view! {
                    <EmptyState title="No deals match your search." hint="Try another keyword or category." />
                }.into_any(),
                CatalogDisplay::Results(_) => view! {
                    <ProductGrid products=visible />
                }.into_any(),
            }}
        </div>
    }
}
