// tests/component_render_tests.rs - Server-side rendering of components
//
// Renders components to HTML under a root owner and checks the markup that
// shoppers and admins depend on.

mod common;

use common::product;
use deals_storefront::web_app::components::{EmptyState, ProductCard, ProductRow};
use deals_storefront::web_app::model::Product;
use leptos::prelude::*;

fn render(view: impl FnOnce() -> String) -> String {
    let owner = Owner::new_root(None);
    owner.with(view)
}

fn headphones() -> Product {
    Product {
        description: Some("Over-ear, 30 hours of battery.".to_string()),
        price: "₹4,999".to_string(),
        ..product(1, "Noise-Cancelling Headphones", Some("Electronics"))
    }
}

// ===== ProductCard =====

#[test]
fn test_card_shows_product_fields() {
    let p = headphones();
    let html = render(move || view! { <ProductCard product=p /> }.to_html());

    assert!(html.contains("Noise-Cancelling Headphones"));
    assert!(html.contains("Electronics"));
    assert!(html.contains("₹4,999"));
    assert!(html.contains("Over-ear, 30 hours of battery."));
    assert!(html.contains("https://img.example/1.jpg"));
}

#[test]
fn test_buy_now_opens_affiliate_link_in_new_tab() {
    let p = headphones();
    let html = render(move || view! { <ProductCard product=p /> }.to_html());

    assert!(html.contains("Buy Now"));
    assert!(html.contains(r#"href="https://shop.example/p/1""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains("noopener"));
}

#[test]
fn test_card_without_category_or_description() {
    let p = product(2, "Steel Bottle", None);
    let html = render(move || view! { <ProductCard product=p /> }.to_html());

    assert!(html.contains("General"));
    assert!(!html.contains("line-clamp-3"));
}

// ===== Admin row and empty state =====

#[test]
fn test_product_row_has_delete_button() {
    let p = product(3, "Desk Lamp", Some("Home"));
    let html = render(move || {
        let on_delete = Callback::new(|_: Product| {});
        let disabled = Signal::derive(|| false);
        view! { <ProductRow product=p on_delete=on_delete disabled=disabled /> }.to_html()
    });

    assert!(html.contains("Desk Lamp"));
    assert!(html.contains("Delete"));
}

#[test]
fn test_empty_state_hint() {
    let html = render(|| {
        view! { <EmptyState title="No products yet." hint="Check back soon." /> }.to_html()
    });

    assert!(html.contains("No products yet."));
    assert!(html.contains("Check back soon."));
}
