//! REST client for the product catalog collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since the catalog is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all map to
//! [`ApiError`] so the controller can report them uniformly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Product, ProductDraft, ProductId};

/// Default REST base used when the page does not advertise one.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/products";

/// Name of the `<meta>` tag carrying the REST base URL.
pub const API_URL_META: &str = "catalog-api-url";

/// Errors produced by catalog REST calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The request body could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No browser networking is available in this build.
    #[error("catalog api not available on server")]
    Unavailable,
}

/// The REST collaborator used by the catalog controller.
///
/// `?Send` because browser fetch futures are bound to the main thread.
#[async_trait::async_trait(?Send)]
pub trait CatalogApi {
    /// `GET {base}`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET {base}/{id}`
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `POST {base}` with the full product, id included.
    async fn create_product(&self, product: &Product) -> Result<(), ApiError>;

    /// `PUT {base}/{id}` with a full replacement body.
    async fn replace_product(&self, id: ProductId, draft: &ProductDraft) -> Result<(), ApiError>;

    /// `DELETE {base}/{id}`
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}

/// Normalize a configured base URL by trimming whitespace and trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn item_endpoint(base: &str, id: ProductId) -> String {
    format!("{base}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status { status }) }
}

/// `gloo-net` implementation of [`CatalogApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalogApi {
    base_url: String,
}

impl Default for HttpCatalogApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl HttpCatalogApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    /// Build a client from the `<meta name="catalog-api-url">` tag rendered by
    /// the page host, falling back to [`DEFAULT_API_URL`].
    pub fn from_document() -> Self {
        crate::util::browser::meta_content(API_URL_META)
            .filter(|url| !url.trim().is_empty())
            .map_or_else(Self::default, |url| Self::new(&url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ProductId) -> String {
        item_endpoint(&self.base_url, id)
    }
}

#[async_trait::async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.base_url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            status_error(resp.status())?;
            resp.json::<Vec<Product>>().await.map_err(|e| ApiError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = self.item_url(id);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            status_error(resp.status())?;
            resp.json::<Product>().await.map_err(|e| ApiError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_product(&self, product: &Product) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.base_url)
                .json(product)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            status_error(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product;
            Err(ApiError::Unavailable)
        }
    }

    async fn replace_product(&self, id: ProductId, draft: &ProductDraft) -> Result<(), ApiError> {
        let url = self.item_url(id);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&url)
                .json(draft)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            status_error(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, draft);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            status_error(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}
