//! Stride Admin - Order and notification management.
//!
//! The admin side reads and mutates the same core stores the storefront
//! feeds, through its own views:
//!
//! - [`orders`] - Filterable, sortable, paginated order listing
//! - [`notifications`] - Notification panel read-model
//! - [`persist`] - The order-store persistence blob

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod notifications;
pub mod orders;
pub mod persist;
