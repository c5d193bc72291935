//! Cart persistence blob.
//!
//! The live cart is saved as one JSON blob (`cart-store.json`), independent
//! of the order blob the admin crate owns. Writes go through a temp file and
//! rename so a crash mid-write never leaves a torn blob behind.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use stride_core::CartService;

/// Errors from blob persistence.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the blob file failed.
    #[error("blob io error: {0}")]
    Io(#[from] io::Error),

    /// The blob could not be encoded or decoded.
    #[error("blob format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Save the cart blob.
///
/// # Errors
///
/// Returns [`PersistError`] when the blob cannot be encoded or written.
pub fn save_cart(cart: &CartService, path: &Path) -> Result<(), PersistError> {
    write_json(path, cart)
}

/// Load the cart blob. A missing file is an empty cart, not an error.
///
/// # Errors
///
/// Returns [`PersistError`] when the file exists but cannot be read or
/// decoded.
pub fn load_cart(path: &Path) -> Result<CartService, PersistError> {
    read_json(path)
}

/// Serialize a value to a path atomically (temp file + rename).
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), "blob saved");
    Ok(())
}

/// Deserialize a value from a path, defaulting when the file is absent.
fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, PersistError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(error) => Err(error.into()),
    }
}
