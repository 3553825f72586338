// web_app/api/handlers.rs - REST endpoints
//
// Routes:
// - GET    /                            health check
// - GET    /api/products                all products, newest first
// - POST   /api/add-product             create (Admin-Secret)
// - DELETE /api/delete-product/{id}     delete (Admin-Secret)
// - OPTIONS /api/*                      CORS preflight
//
// Every origin is allowed. Errors are JSON bodies with an "error" field.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::DefaultHeaders;
use actix_web::{guard, web, HttpRequest, HttpResponse};

use super::store::{NewProduct, ProductStore, StoreError};
use crate::web_app::client::ADMIN_SECRET_HEADER;
use crate::web_app::model::{ApiMessage, ProductDraft};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub admin_password: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, admin_password: impl Into<String>) -> Self {
        Self {
            store,
            admin_password: admin_password.into(),
        }
    }

    fn is_authorized(&self, req: &HttpRequest) -> bool {
        req.headers()
            .get(ADMIN_SECRET_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|secret| secret == self.admin_password)
    }
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // Must come first: only OPTIONS requests pass the guard
        web::resource("/api/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    )
    .route("/", web::get().to(health))
    .route("/api/products", web::get().to(list_products))
    .route("/api/add-product", web::post().to(add_product))
    .route("/api/delete-product/{id}", web::delete().to(delete_product));
}

/// Headers added to every response so any origin may call the API
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
}

async fn preflight() -> HttpResponse {
    HttpResponse::NoContent()
        .insert_header(("Access-Control-Allow-Methods", "GET, POST, DELETE, OPTIONS"))
        .insert_header((
            "Access-Control-Allow-Headers",
            format!("Content-Type, {ADMIN_SECRET_HEADER}"),
        ))
        .insert_header(("Access-Control-Max-Age", "86400"))
        .finish()
}

async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend is Running!")
}

async fn list_products(state: web::Data<AppState>) -> HttpResponse {
    match state.store.list().await {
        Ok(products) => {
            tracing::debug!("Listing {} products", products.len());
            HttpResponse::Ok().json(products)
        }
        Err(e) => {
            tracing::error!("Failed to fetch products: {}", e);
            HttpResponse::InternalServerError().json(ApiMessage {
                error: Some("Failed to fetch products".to_string()),
                details: Some(e.to_string()),
                ..ApiMessage::default()
            })
        }
    }
}

async fn add_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> HttpResponse {
    // The secret is checked before the body is even parsed
    if !state.is_authorized(&req) {
        tracing::warn!("Rejected add-product: wrong admin secret");
        return unauthorized();
    }

    let draft: ProductDraft = match serde_json::from_slice(&body) {
        Ok(draft) => draft,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON: {e}")),
    };

    let product = match NewProduct::from_draft(draft) {
        Ok(product) => product,
        Err(e) => return store_error(e),
    };

    match state.store.insert(product).await {
        Ok(created) => {
            tracing::info!("Added product {} '{}'", created.id, created.title);
            HttpResponse::Created().json(ApiMessage {
                message: Some("Product added successfully!".to_string()),
                product: Some(created),
                ..ApiMessage::default()
            })
        }
        Err(e) => store_error(e),
    }
}

async fn delete_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> HttpResponse {
    if !state.is_authorized(&req) {
        tracing::warn!("Rejected delete-product: wrong admin secret");
        return unauthorized();
    }

    let id = path.into_inner();
    match state.store.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted product {}", id);
            HttpResponse::Ok().json(ApiMessage {
                message: Some("Product deleted successfully!".to_string()),
                ..ApiMessage::default()
            })
        }
        Err(e) => store_error(e),
    }
}

fn unauthorized() -> HttpResponse {
    error_response(StatusCode::UNAUTHORIZED, "Unauthorized: Wrong Password")
}

fn store_error(e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Product not found"),
        StoreError::Invalid(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        StoreError::Database(e) => {
            tracing::error!("Database error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, error: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiMessage {
        error: Some(error.into()),
        ..ApiMessage::default()
    })
}
