//! Batch pricing with catalog partitioning
//!
//! This module provides the `BatchProcessor` struct, which splits the catalog
//! into batches and prices each batch in its own tokio task, with at most
//! `max_concurrent` batch tasks in flight.
//!
//! # Design
//!
//! Every record keeps its catalog position through partitioning, so the engine
//! can restore catalog order no matter which task finishes first.
//!
//! # Thread Safety
//!
//! The processor is cloneable and can be safely shared across async tasks.
//! It only holds an `Arc` to the engine.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use super::AsyncPricingEngine;
use crate::types::{CheckoutError, Price, Sku};

/// Catalog records tagged with their catalog position
pub type SkuBatch = Vec<(usize, Sku)>;

/// Batch processor with catalog partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Shared pricing engine
    engine: Arc<AsyncPricingEngine>,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    pub fn new(engine: Arc<AsyncPricingEngine>) -> Self {
        Self { engine }
    }

    /// Partition the catalog into batches of at most `batch_size` records
    ///
    /// # Guarantees
    ///
    /// - Each record appears in exactly one batch, tagged with its position
    /// - Batches preserve catalog order internally and between each other
    /// - A `batch_size` of 0 is treated as 1
    pub fn partition_catalog(&self, catalog: &[Sku], batch_size: usize) -> Vec<SkuBatch> {
        let batch_size = batch_size.max(1);
        let indexed: Vec<(usize, Sku)> = catalog.iter().cloned().enumerate().collect();

        indexed
            .chunks(batch_size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Price every record of one batch
    ///
    /// # Returns
    ///
    /// The sum of the batch's line subtotals.
    pub async fn process_batch(&self, batch: SkuBatch) -> Price {
        batch.iter().fold(0, |acc: Price, (position, sku)| {
            acc.saturating_add(self.engine.price_sku(*position, sku))
        })
    }

    /// Price the whole catalog, one tokio task per batch
    ///
    /// Tasks are spawned lazily, so no more than `max_concurrent` batches
    /// (at least 1) are spawned and unfinished at any time.
    ///
    /// # Returns
    ///
    /// * `Ok(Price)` - sum of all batch subtotals
    /// * `Err(CheckoutError)` - a pricing task panicked; the receipt would be incomplete
    pub async fn process_catalog(
        &self,
        catalog: &[Sku],
        batch_size: usize,
        max_concurrent: usize,
    ) -> Result<Price, CheckoutError> {
        let batches = self.partition_catalog(catalog, batch_size);
        let max_concurrent = max_concurrent.max(1);
        debug!(
            skus = catalog.len(),
            batches = batches.len(),
            batch_size,
            max_concurrent,
            "Pricing catalog in batches"
        );

        let mut results = stream::iter(batches)
            .map(|batch| {
                let processor = self.clone();
                tokio::spawn(async move { processor.process_batch(batch).await })
            })
            .buffer_unordered(max_concurrent);

        let mut total: Price = 0;
        while let Some(result) = results.next().await {
            match result {
                Ok(subtotal) => total = total.saturating_add(subtotal),
                Err(e) => {
                    warn!(error = %e, "Pricing task failed");
                    return Err(CheckoutError::runtime(e));
                }
            }
        }

        Ok(total)
    }
}
