//! Asynchronous batch pricing strategy
//!
//! This module provides a multi-threaded implementation of the PricingStrategy
//! trait. The catalog is split into batches and each batch is priced in its own
//! tokio task against a shared basket.
//!
//! # Architecture
//!
//! ```text
//! AsyncPricingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── BatchProcessor (catalog partitioning + task spawning)
//!     └── AsyncPricingEngine (thread-safe line collection)
//!         └── Arc<Basket> (shared, read-only)
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::r#async::{AsyncPricingEngine, BatchProcessor};
use crate::core::Basket;
use crate::strategy::PricingStrategy;
use crate::types::{CheckoutError, Receipt, Sku};

/// Configuration for batch pricing
///
/// Build through `new` or `default`; zero values never get past `new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of catalog records per batch
    batch_size: usize,
    /// Upper bound on batch tasks in flight, also the runtime's worker count
    max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig; zero values fall back to the defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "Invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "Invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_concurrent_batches(&self) -> usize {
        self.max_concurrent_batches
    }
}

/// Asynchronous batch pricing strategy
///
/// Builds a tokio multi-threaded runtime per call, so it must not be invoked
/// from inside another tokio runtime.
#[derive(Debug, Clone)]
pub struct AsyncPricingStrategy {
    config: BatchConfig,
}

impl AsyncPricingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl PricingStrategy for AsyncPricingStrategy {
    /// Price the basket with batches of SKUs priced concurrently
    ///
    /// 1. Creates a tokio runtime with `max_concurrent_batches` workers
    /// 2. Shares the basket with an `AsyncPricingEngine`
    /// 3. Lets the `BatchProcessor` spawn one task per batch, at most
    ///    `max_concurrent_batches` in flight
    /// 4. Reassembles the receipt in catalog order
    fn price(&self, catalog: &[Sku], basket: &Basket) -> Result<Receipt, CheckoutError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches.max(1))
            .build()
            .map_err(CheckoutError::runtime)?;

        runtime.block_on(async {
            let engine = Arc::new(AsyncPricingEngine::new(Arc::new(basket.clone())));
            let processor = BatchProcessor::new(Arc::clone(&engine));

            let total = processor
                .process_catalog(
                    catalog,
                    self.config.batch_size,
                    self.config.max_concurrent_batches,
                )
                .await?;

            let receipt = engine.receipt();
            debug!(total, lines = receipt.lines.len(), "Async pricing finished");
            Ok(receipt)
        })
    }
}
