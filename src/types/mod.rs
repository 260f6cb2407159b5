//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `sku`: Catalog entries and the per-SKU pricing rule
//! - `receipt`: Pricing results
//! - `error`: Error types for the checkout engine

pub mod error;
pub mod receipt;
pub mod sku;

pub use error::CheckoutError;
pub use receipt::{LineItem, Receipt};
pub use sku::{Price, Quantity, Sku};
