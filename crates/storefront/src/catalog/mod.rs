//! Product catalog: the product service client and browse filters.
//!
//! Products come from an external service as a plain JSON list; everything
//! after the fetch (filtering, sorting, search) happens locally.

pub mod filter;

pub use filter::{GenderFilter, ProductFilter, SortOption};

use thiserror::Error;
use tracing::instrument;
use url::Url;

use stride_core::Product;

/// Errors from the product service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the response body not read.
    #[error("product service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("product service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The catalog URL could not be built from the base URL.
    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
}

/// Client for the external product service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client against a product service base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The `/products` endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] when the base URL cannot take a
    /// path segment (e.g., a `mailto:` URL).
    pub fn products_url(&self) -> Result<Url, CatalogError> {
        self.base_url
            .join("products")
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Status`] for non-success responses and
    /// [`CatalogError::Http`] for transport or decode failures.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url()?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "product service returned an error");
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = response.json().await?;
        tracing::debug!(count = products.len(), "fetched product catalog");
        Ok(products)
    }
}
