//! Shopping cart store.
//!
//! The cart holds one line per (product, size) pair. Adding an existing pair
//! increments its quantity; a new pair appends a line keyed by the composite
//! `{product_id}-{size}` id. The cart is a plain service object - construct
//! one at startup and pass it to whoever mutates it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CartLineId, Product};

/// Errors from cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantities below one are rejected; a line never holds zero units.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// No line with the given id exists.
    #[error("no cart line with id {0}")]
    LineNotFound(CartLineId),
}

/// One product/size selection in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub product: Product,
    pub size: String,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: discounted unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.discount_price * Decimal::from(self.quantity)
    }
}

/// The live shopping cart.
///
/// Serializes directly as the cart persistence blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartService {
    lines: Vec<CartLine>,
}

impl CartService {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of a product in a size.
    ///
    /// If a line for the same (product, size) pair already exists its
    /// quantity is incremented; otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add(&mut self, product: Product, size: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let id = CartLineId::for_selection(&product, size);
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                id,
                product,
                size: size.to_string(),
                quantity,
            });
        }
        Ok(())
    }

    /// Remove a line. Removing an absent line is a no-op, not an error.
    pub fn remove(&mut self, id: &CartLineId) {
        self.lines.retain(|line| &line.id != id);
    }

    /// Set a line's quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero (use
    /// [`remove`](Self::remove) to drop a line) and
    /// [`CartError::LineNotFound`] when no such line exists.
    pub fn set_quantity(&mut self, id: &CartLineId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let line = self
            .lines
            .iter_mut()
            .find(|line| &line.id == id)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of discounted line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
