//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PRODUCT_API_BASE_URL` - Base URL of the external product service
//!   (default: `http://localhost:8000`)
//! - `STRIDE_DATA_DIR` - Directory for the persistence blobs (default: `.`)
//! - `STRIDE_SHIPPING_FEE` - Flat shipping fee (default: 300)
//! - `STRIDE_TAX_RATE` - Tax rate applied to the subtotal (default: 0.08)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the product service.
    pub product_api_base_url: Url,
    /// Directory holding `cart-store.json` and `order-store.json`.
    pub data_dir: PathBuf,
    /// Flat shipping fee added to every order.
    pub shipping_fee: Decimal,
    /// Tax rate applied to the cart subtotal.
    pub tax_rate: Decimal,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let product_api_base_url =
            get_env_or_default("PRODUCT_API_BASE_URL", "http://localhost:8000")
                .parse::<Url>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("PRODUCT_API_BASE_URL".to_string(), e.to_string())
                })?;

        let data_dir = PathBuf::from(get_env_or_default("STRIDE_DATA_DIR", "."));

        let shipping_fee = parse_decimal("STRIDE_SHIPPING_FEE", "300")?;
        let tax_rate = parse_decimal("STRIDE_TAX_RATE", "0.08")?;

        Ok(Self {
            product_api_base_url,
            data_dir,
            shipping_fee,
            tax_rate,
        })
    }

    /// Path of the cart persistence blob.
    #[must_use]
    pub fn cart_store_path(&self) -> PathBuf {
        self.data_dir.join("cart-store.json")
    }

    /// Path of the order persistence blob.
    #[must_use]
    pub fn order_store_path(&self) -> PathBuf {
        self.data_dir.join("order-store.json")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a decimal environment variable with a default.
fn parse_decimal(key: &str, default: &str) -> Result<Decimal, ConfigError> {
    get_env_or_default(key, default)
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
