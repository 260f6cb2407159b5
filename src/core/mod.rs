//! Core pricing module
//!
//! This module contains the pricing components:
//! - `traits` - Collaborator abstractions (catalog loading, line reading)
//! - `basket` - Scanned basket with precomputed frequencies
//! - `engine` - Single-threaded pricing engine
//! - `async` - Concurrent pricing engine and batch processor

pub mod r#async;
pub mod basket;
pub mod engine;
pub mod traits;

pub use basket::Basket;
pub use engine::{compute_total, price_line, PricingEngine};
pub use r#async::{AsyncPricingEngine, BatchProcessor};
pub use traits::{CatalogLoader, LineReader};
