//! Order-store persistence blob.
//!
//! Orders, the current-order pointer, and the notification feed persist
//! together as one JSON blob (`order-store.json`), independent of the cart
//! blob the storefront owns. Writes are atomic (temp file + rename).

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use stride_core::OrderService;

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

/// Save the order-store blob.
///
/// # Errors
///
/// Returns [`PersistError`] when the blob cannot be encoded or written.
pub fn save_orders(store: &OrderService, path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, serde_json::to_string_pretty(store)?)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), orders = store.orders().len(), "order blob saved");
    Ok(())
}

/// Load the order-store blob. A missing file is an empty store, not an
/// error.
///
/// # Errors
///
/// Returns [`PersistError`] when the file exists but cannot be read or
/// decoded.
pub fn load_orders(path: &Path) -> Result<OrderService, PersistError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(OrderService::new()),
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use stride_core::{
        CartLine, CartLineId, Gender, OrderDraft, OrderStatus, Product, ProductId,
    };

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("stride-orders-{}.json", Uuid::new_v4()))
    }

    fn line() -> CartLine {
        let product = Product {
            id: ProductId::new(1),
            name: "Air Zoom".to_string(),
            brand: "Nike".to_string(),
            categories: vec!["running".to_string()],
            gender: Gender::Men,
            original_price: Decimal::new(1200, 0),
            discount_price: Decimal::new(1200, 0),
            sizes: vec!["M".to_string()],
            date_added: Utc::now(),
            sales: 3,
        };
        CartLine {
            id: CartLineId::for_selection(&product, "M"),
            product,
            size: "M".to_string(),
            quantity: 2,
        }
    }

    #[test]
    fn orders_and_notifications_round_trip() {
        let path = scratch_path();
        let mut store = OrderService::new();
        let id = store
            .place_order(OrderDraft {
                items: vec![line()],
                total_price: Decimal::new(2892, 0),
                shipping: Decimal::new(300, 0),
                tax: Decimal::new(192, 0),
                payment: None,
                initial_status: OrderStatus::PaymentConfirmed,
            })
            .unwrap();
        store.update_status(id, OrderStatus::Shipped, Some("Left warehouse")).unwrap();
        store.mark_notification_read(store.notifications()[0].id).unwrap();

        save_orders(&store, &path).unwrap();
        let restored = load_orders(&path).unwrap();

        assert_eq!(restored.orders(), store.orders());
        assert_eq!(restored.notifications(), store.notifications());
        assert_eq!(restored.current_order().unwrap().id, id);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_blob_is_an_empty_store() {
        let store = load_orders(&scratch_path()).unwrap();
        assert!(store.orders().is_empty());
        assert!(store.notifications().is_empty());
    }
}
