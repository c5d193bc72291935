//! Core types for Stride.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod payment;
pub mod product;
pub mod status;

pub use id::*;
pub use payment::{PaymentDetails, PaymentMethod};
pub use product::{Gender, Product};
pub use status::*;
