//! Checkout Engine Library
//! # Overview
//!
//! This library prices a basket of scanned items against a catalog of SKUs that
//! may define bulk ("special") discounts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Sku, Receipt, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::basket`] - Scanned basket with precomputed item counts
//!   - [`core::engine`] - The pricing rule applied across the catalog
//!   - [`core::traits`] - Injected collaborators (catalog loader, line reader)
//! - [`io`] - Catalog JSON decoding, the basket prompt, and the printed total
//! - [`strategy`] - Sync and async pricing strategies
//! - [`session`] - The load → prompt → price → print flow
//!
//! # Pricing Rule
//!
//! For every catalog record, in catalog order:
//!
//! - **Count**: occurrences of the identifier in the basket
//! - **Bundle**: every `special_quantity` units cost `special_price`
//! - **Leftover**: remaining units cost `unit_price` each
//!
//! Characters that match no identifier are ignored. All arithmetic is integer.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod strategy;
pub mod types;

pub use crate::core::{compute_total, Basket, CatalogLoader, LineReader, PricingEngine};
pub use io::{FileCatalogLoader, PromptReader};
pub use session::Session;
pub use types::{CheckoutError, LineItem, Price, Quantity, Receipt, Sku};
