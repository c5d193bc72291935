//! CLI command implementations.

pub mod demo;
pub mod notifications;
pub mod orders;
pub mod seed;

use std::path::PathBuf;

use thiserror::Error;

use stride_storefront::config::{ConfigError, StorefrontConfig};

/// Errors shared by the store-backed commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A persistence blob could not be read or written.
    #[error(transparent)]
    CartBlob(#[from] stride_storefront::persist::PersistError),

    /// The order blob could not be read or written.
    #[error(transparent)]
    OrderBlob(#[from] stride_admin::persist::PersistError),

    /// The store rejected an operation.
    #[error(transparent)]
    Order(#[from] stride_core::OrderError),

    /// The cart rejected an operation.
    #[error(transparent)]
    Cart(#[from] stride_core::CartError),

    /// An argument could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A catalog file could not be read or written.
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be encoded or decoded.
    #[error("catalog format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the storefront configuration. Every variable has a default, so the
/// CLI works out of the box against `./`.
pub(crate) fn config() -> Result<StorefrontConfig, CommandError> {
    Ok(StorefrontConfig::from_env()?)
}

/// Path of the seeded product catalog.
pub(crate) fn products_path(config: &StorefrontConfig) -> PathBuf {
    config.data_dir.join("products.json")
}
