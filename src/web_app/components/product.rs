// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card on the storefront
// - ProductGrid: Responsive grid of cards
// - ProductRow: Admin list entry with a delete button

use leptos::prelude::*;
use crate::web_app::model::Product;
use super::common::Badge;

/// Storefront card for one deal
///
/// Pure rendering: the "Buy Now" link opens the affiliate URL in a new tab.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let category = product.category_label().to_string();
    let description = product.description_text().map(str::to_string);

    view! {
        <div class="bg-white border border-gray-200 rounded-lg shadow hover:shadow-lg \
                    transition-shadow duration-300 overflow-hidden flex flex-col">
            // Image
            <div class="h-48 w-full bg-white flex items-center justify-center p-2">
                <img
                    src=product.image_url.clone()
                    alt=product.title.clone()
                    class="max-h-full max-w-full object-contain"
                />
            </div>

            <div class="p-4 flex flex-col flex-grow">
                <Badge>{category}</Badge>
                <h2 class="text-lg font-bold text-gray-800 leading-tight mb-2 line-clamp-2">
                    {product.title.clone()}
                </h2>

                {description.map(|text| view! {
                    <p class="text-sm text-gray-600 mb-3 line-clamp-3">{text}</p>
                })}

                <div class="mt-auto flex items-center justify-between">
                    <span class="text-xl font-bold text-green-600">
                        {product.price.clone()}
                    </span>
                    <a
                        href=product.link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-blue-600 text-white px-4 py-2 rounded-md font-medium \
                               hover:bg-blue-700 transition-colors"
                    >
                        "Buy Now"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Responsive grid of product cards
#[component]
pub fn ProductGrid(
    /// Products to display, already filtered
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

/// Admin list entry
#[component]
pub fn ProductRow(
    /// The listing
    product: Product,
    /// Called with the product when delete is clicked
    on_delete: Callback<Product>,
    /// Disable the button while another request is outstanding
    disabled: Signal<bool>,
) -> impl IntoView {
    let category = product.category_label().to_string();
    let target = product.clone();

    view! {
        <li class="flex items-center gap-4 p-3 border rounded-lg bg-white">
            <img
                src=product.image_url.clone()
                alt=product.title.clone()
                class="h-12 w-12 object-contain flex-shrink-0"
            />
            <div class="flex-1 min-w-0">
                <p class="font-semibold text-gray-800 truncate">{product.title.clone()}</p>
                <p class="text-xs text-gray-500">
                    {category} " · " {product.price.clone()}
                </p>
            </div>
            <button
                type="button"
                class="px-3 py-1.5 text-sm font-medium text-red-600 border border-red-200 \
                       rounded-lg hover:bg-red-50 disabled:opacity-50"
                disabled=move || disabled.get()
                on:click=move |_| on_delete.run(target.clone())
            >
                "Delete"
            </button>
        </li>
    }
}
