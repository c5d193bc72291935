//! Stride Core - Shared types and domain stores.
//!
//! This crate provides the common types and the in-memory domain stores used
//! across all Stride components:
//! - `storefront` - Customer-facing catalog, cart, and checkout services
//! - `admin` - Order and notification management panel
//! - `cli` - Command-line entry point driving both
//!
//! # Architecture
//!
//! The core crate contains types and pure in-memory state - no I/O, no HTTP
//! clients, no filesystem access. Persistence and the payment gateway live in
//! the outer crates and talk to the stores through their public methods.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, statuses, products, and payment vocabulary
//! - [`cart`] - The shopping cart store
//! - [`orders`] - The order store: lifecycle, status history, notifications

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod orders;
pub mod types;

pub use cart::{CartError, CartLine, CartService};
pub use orders::{
    CustomerInfo, Notification, Order, OrderDraft, OrderError, OrderNote, OrderService,
    StatusEvent,
};
pub use types::*;
