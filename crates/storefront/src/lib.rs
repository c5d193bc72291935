//! Stride Storefront - Customer-facing services.
//!
//! Everything a shopper touches lives here:
//!
//! - [`catalog`] - Product service client and browse filters
//! - [`checkout`] - Quote math and the cart → payment → order flow
//! - [`payment`] - The payment gateway contract and its simulated backend
//! - [`persist`] - The cart persistence blob
//! - [`config`] - Environment configuration
//!
//! The storefront holds no state of its own; it drives the stores in
//! `stride-core` and is in turn driven by the CLI (or any future front end).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod payment;
pub mod persist;
