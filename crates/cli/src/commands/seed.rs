//! Seed the data directory with the sample product catalog.
//!
//! The demo session reads products from this file instead of requiring the
//! external product service to be running.

use std::fs;
use std::path::Path;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use stride_core::{Gender, Product, ProductId};

use super::{CommandError, config, products_path};

/// The built-in sample catalog.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    let now = Utc::now();
    let product = |id: i64,
                   name: &str,
                   brand: &str,
                   categories: &[&str],
                   gender: Gender,
                   original: i64,
                   discounted: i64,
                   age_days: i64,
                   sales: u64| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        categories: categories.iter().map(ToString::to_string).collect(),
        gender,
        original_price: Decimal::new(original, 0),
        discount_price: Decimal::new(discounted, 0),
        sizes: ["7", "8", "9", "10", "11"].map(String::from).to_vec(),
        date_added: now - Duration::days(age_days),
        sales,
    };

    vec![
        product(1, "Air Zoom Pegasus", "Nike", &["running"], Gender::Men, 1400, 1200, 40, 320),
        product(2, "Ultraboost Light", "Adidas", &["running", "lifestyle"], Gender::Women, 2000, 1800, 10, 210),
        product(3, "Gel Kayano 31", "Asics", &["running", "stability"], Gender::Unisex, 1100, 900, 90, 150),
        product(4, "Classic Leather", "Reebok", &["lifestyle"], Gender::Unisex, 800, 800, 365, 540),
        product(5, "Pegasus Trail 5", "Nike", &["trail"], Gender::Men, 1600, 1600, 5, 60),
        product(6, "Cloudmonster 2", "On", &["running", "cushioned"], Gender::Women, 1900, 1700, 20, 95),
    ]
}

/// Write the sample catalog into the data directory.
///
/// # Errors
///
/// Returns [`CommandError`] when the catalog cannot be written.
pub fn run() -> Result<(), CommandError> {
    let config = config()?;
    let path = products_path(&config);
    let products = sample_products();

    fs::write(&path, serde_json::to_string_pretty(&products)?)?;

    tracing::info!(path = %path.display(), count = products.len(), "sample catalog written");
    Ok(())
}

/// Load products from the seed file, falling back to the built-in catalog
/// when the file is absent or unreadable.
#[must_use]
pub fn load_or_sample(path: &Path) -> Vec<Product> {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str(&contents).ok())
        .unwrap_or_else(sample_products)
}
