//! Product catalog types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A catalog product as served by the product service.
///
/// Prices are in the store currency's standard unit. `discount_price` is the
/// price actually charged; `original_price` is the strike-through price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub categories: Vec<String>,
    pub gender: Gender,
    pub original_price: Decimal,
    pub discount_price: Decimal,
    /// Sizes available for this product (e.g., "M", "42").
    pub sizes: Vec<String>,
    pub date_added: DateTime<Utc>,
    /// Units sold, used for best-selling sort.
    pub sales: u64,
}

impl Product {
    /// Whether the product is currently discounted.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price > self.discount_price
    }

    /// Discount as a whole percentage of the original price, rounded.
    ///
    /// Returns 0 for non-discounted products.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        if !self.has_discount() || self.original_price.is_zero() {
            return 0;
        }
        let ratio = (self.original_price - self.discount_price) / self.original_price;
        (ratio * Decimal::ONE_HUNDRED).round().to_u32().unwrap_or(0)
    }
}

/// Product gender targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unisex,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Men => write!(f, "men"),
            Self::Women => write!(f, "women"),
            Self::Unisex => write!(f, "unisex"),
        }
    }
}
