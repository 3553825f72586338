// web_app/client.rs - HTTP client for the storefront REST API
//
// One configured client pointed at the backend base URL. Every page goes
// through it. No retry, no timeout, no caching: failures are returned to the
// caller as `ApiError`.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::web_app::model::{ApiMessage, Product, ProductDraft, ScrapeRequest};

/// Backend address used when `DEALS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Header carrying the shared admin secret on write requests
pub const ADMIN_SECRET_HEADER: &str = "Admin-Secret";

/// Base URL baked in at compile time
pub fn configured_base_url() -> &'static str {
    option_env!("DEALS_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the admin secret
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

/// API client for the deals backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(configured_base_url())
    }
}

impl ApiClient {
    /// Create a client for the given base URL (a trailing `/` is ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = with_headers(self.client.get(&url), headers);
        send(url, request).await
    }

    /// POST a JSON body to `path` and decode the JSON response
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let request = with_headers(self.client.post(&url).json(body), headers);
        send(url, request).await
    }

    /// DELETE `path` and decode the JSON response
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = with_headers(self.client.delete(&url), headers);
        send(url, request).await
    }

    /// Fetch every product listing
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/api/products", &[]).await
    }

    /// Ask the backend to analyze a product page and propose draft fields
    pub async fn smart_scrape(&self, url: &str) -> Result<ProductDraft, ApiError> {
        let body = ScrapeRequest {
            url: url.to_string(),
        };
        self.post("/api/smart-scrape", &body, &[]).await
    }

    /// Publish a draft, authorized by the admin secret.
    ///
    /// Any 2xx answer counts as success, whatever its body.
    pub async fn add_product(
        &self,
        draft: &ProductDraft,
        secret: &str,
    ) -> Result<ApiMessage, ApiError> {
        let url = self.url("/api/add-product");
        let request = self
            .client
            .post(&url)
            .json(draft)
            .header(ADMIN_SECRET_HEADER, secret);
        send_mutation(url, request).await
    }

    /// Delete a listing, authorized by the admin secret
    pub async fn delete_product(&self, id: i64, secret: &str) -> Result<ApiMessage, ApiError> {
        let url = self.url(&format!("/api/delete-product/{id}"));
        let request = self.client.delete(&url).header(ADMIN_SECRET_HEADER, secret);
        send_mutation(url, request).await
    }
}

fn with_headers(mut request: RequestBuilder, headers: &[(&str, &str)]) -> RequestBuilder {
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    request
}

async fn send<T: DeserializeOwned>(url: String, request: RequestBuilder) -> Result<T, ApiError> {
    let body = fetch(&url, request).await?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
}

/// Send a write request. The status decides success: a 2xx with an empty
/// or non-JSON body (`204 No Content`, a bare "OK") yields an empty
/// `ApiMessage`.
async fn send_mutation(url: String, request: RequestBuilder) -> Result<ApiMessage, ApiError> {
    let body = fetch(&url, request).await?;
    Ok(message_from_body(&url, &body))
}

fn message_from_body(url: &str, body: &str) -> ApiMessage {
    if body.trim().is_empty() {
        return ApiMessage::default();
    }
    serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::debug!("{} answered with a non-JSON body ({}): {}", url, e, body);
        ApiMessage::default()
    })
}

/// Send the request and return the body of a 2xx response
async fn fetch(url: &str, request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    if !status.is_success() {
        tracing::debug!("{} answered {}: {}", url, status, body);
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
            body,
        });
    }
    Ok(body)
}
