//! Shared fixtures for the Stride integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use stride_core::{CartService, Gender, Product, ProductId};

/// A product priced at `price` in every common size.
#[must_use]
pub fn product(id: i64, name: &str, brand: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        categories: vec!["running".to_string()],
        gender: Gender::Unisex,
        original_price: Decimal::new(price, 0),
        discount_price: Decimal::new(price, 0),
        sizes: vec!["M".to_string(), "L".to_string()],
        date_added: Utc::now(),
        sales: 0,
    }
}

/// Reference cart: 2 units at 1000 (size M) plus 1 unit at 2000 (size L).
/// Subtotal 4000; with flat 300 shipping and 8% tax the total is 4620.
#[must_use]
pub fn reference_cart() -> CartService {
    let mut cart = CartService::new();
    cart.add(product(1, "Air Zoom Pegasus", "Nike", 1000), "M", 2)
        .unwrap();
    cart.add(product(2, "Ultraboost Light", "Adidas", 2000), "L", 1)
        .unwrap();
    cart
}

/// A unique scratch file path under the system temp directory.
#[must_use]
pub fn scratch_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}-{}.json", Uuid::new_v4()))
}
