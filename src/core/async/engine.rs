//! Concurrent pricing engine for async batch pricing
//!
//! This module provides the `AsyncPricingEngine` struct, which prices catalog
//! records from many tasks at once against one shared basket.
//!
//! # Design
//!
//! Each SKU's contribution depends only on the SKU and the basket, so records
//! can be priced in any order on any thread. Line items are stored in a
//! `DashMap` keyed by catalog position and reassembled in catalog order when
//! the receipt is built.
//!
//! # Architecture
//!
//! ```text
//! AsyncPricingEngine
//!     ├── Arc<Basket>                (shared, read-only)
//!     └── DashMap<usize, LineItem>   (line items by catalog position)
//! ```
use std::sync::Arc;

use dashmap::DashMap;

use crate::core::basket::Basket;
use crate::core::engine::price_line;
use crate::types::{LineItem, Price, Receipt, Sku};

/// Thread-safe pricing engine
///
/// Share it behind an `Arc`; `price_sku` only needs `&self`.
#[derive(Debug)]
pub struct AsyncPricingEngine {
    /// Basket being priced, shared by every task
    basket: Arc<Basket>,

    /// Priced lines keyed by the record's position in the catalog
    lines: DashMap<usize, LineItem>,
}

impl AsyncPricingEngine {
    /// Create an engine pricing `basket`
    pub fn new(basket: Arc<Basket>) -> Self {
        Self {
            basket,
            lines: DashMap::new(),
        }
    }

    /// Price the catalog record at `position` and record its line
    ///
    /// # Returns
    ///
    /// The line's subtotal.
    pub fn price_sku(&self, position: usize, sku: &Sku) -> Price {
        let line = price_line(sku, &self.basket);
        let subtotal = line.subtotal;
        self.lines.insert(position, line);
        subtotal
    }

    /// Number of records priced so far
    pub fn priced_count(&self) -> usize {
        self.lines.len()
    }

    /// Assemble the receipt in catalog order
    pub fn receipt(&self) -> Receipt {
        let mut positioned: Vec<(usize, LineItem)> = self
            .lines
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        positioned.sort_by_key(|(position, _)| *position);

        Receipt::from_lines(positioned.into_iter().map(|(_, line)| line).collect())
    }
}
