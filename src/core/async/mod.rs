//! Asynchronous pricing components
//!
//! This module contains the thread-safe pieces used by the async pricing
//! strategy:
//! - `engine` - `AsyncPricingEngine`, line items in a `DashMap`
//! - `batch_processor` - `BatchProcessor`, catalog partitioning and task spawning

pub mod batch_processor;
pub mod engine;

pub use batch_processor::{BatchProcessor, SkuBatch};
pub use engine::AsyncPricingEngine;
