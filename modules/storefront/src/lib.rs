//! Storefront Store Module
//!
//! Relational schema for a basic e-commerce backend: users, categories, products
//! with variants and images, discounts, orders with items and status history, and
//! reviews. Constraints are declared in the migrations and enforced by the database.

// Public exports
pub mod contract;
pub use contract::{client::StorefrontApi, error::StorefrontError};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::StorefrontModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
