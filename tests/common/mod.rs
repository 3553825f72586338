// common/mod.rs - Shared test utilities
//
// Product builders plus wiremock helpers that stand in for the REST backend.

#![allow(dead_code)]

use deals_storefront::web_app::client::{ApiClient, ADMIN_SECRET_HEADER};
use deals_storefront::web_app::model::{Product, ProductDraft};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SECRET: &str = "correct-horse";

pub fn product(id: i64, title: &str, category: Option<&str>) -> Product {
    Product {
        id,
        title: title.to_string(),
        image_url: format!("https://img.example/{id}.jpg"),
        link: format!("https://shop.example/p/{id}"),
        price: "₹999".to_string(),
        category: category.map(str::to_string),
        description: None,
    }
}

pub fn draft(title: &str, price: &str) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        image_url: "https://img.example/x.jpg".to_string(),
        link: "https://shop.example/x".to_string(),
        price: price.to_string(),
        category: "Tech".to_string(),
        description: String::new(),
    }
}

/// Start a mock backend and a client pointed at it
pub async fn start_backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

/// Serve `products` from `GET /api/products`, expecting exactly `calls` hits
pub async fn mount_products(server: &MockServer, products: &[Product], calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products))
        .expect(calls)
        .mount(server)
        .await;
}

/// `POST /api/add-product` that accepts only [`SECRET`]
pub async fn mount_add_product(server: &MockServer, created: &Product) {
    Mock::given(method("POST"))
        .and(path("/api/add-product"))
        .and(header(ADMIN_SECRET_HEADER, SECRET))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Product added successfully!",
            "product": created,
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/add-product"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Unauthorized: Wrong Password" })),
        )
        .mount(server)
        .await;
}
