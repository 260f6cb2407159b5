//! Checkout session
//!
//! Orchestrates one run: load the catalog, prompt for the basket, price it,
//! print the total. The session owns no I/O itself; every collaborator is
//! injected at construction.
//!
//! # Design
//!
//! The Session focuses on orchestration, delegating:
//! - Catalog loading to a `CatalogLoader`
//! - Basket input to a `LineReader`
//! - Pricing to a `PricingStrategy`
//! - Output to `io::write_total`

use std::io::Write;

use tracing::{debug, info};

use crate::core::{Basket, CatalogLoader, LineReader};
use crate::io::{write_total, SCAN_PROMPT};
use crate::strategy::PricingStrategy;
use crate::types::{CheckoutError, Price};

/// One checkout run with injected collaborators
pub struct Session {
    loader: Box<dyn CatalogLoader>,
    reader: Box<dyn LineReader>,
    strategy: Box<dyn PricingStrategy>,
}

impl Session {
    /// Create a session from its collaborators
    pub fn new(
        loader: Box<dyn CatalogLoader>,
        reader: Box<dyn LineReader>,
        strategy: Box<dyn PricingStrategy>,
    ) -> Self {
        Self {
            loader,
            reader,
            strategy,
        }
    }

    /// Run the load → prompt → price → print flow
    ///
    /// The catalog is loaded before prompting; if it fails the operator is never
    /// asked for a basket and nothing is written to `output`.
    ///
    /// # Returns
    ///
    /// * `Ok(Price)` - the total that was written
    /// * `Err(CheckoutError)` - catalog, input, output or runtime failure
    pub fn run(&mut self, output: &mut dyn Write) -> Result<Price, CheckoutError> {
        let catalog = self.loader.load()?;

        let scanned = self.reader.read_line(SCAN_PROMPT)?;
        let basket = Basket::new(scanned);
        debug!(scanned = %basket.as_str(), "Read basket");

        let receipt = self.strategy.price(&catalog, &basket)?;
        info!(
            total = receipt.total,
            matched = receipt.matched_units(),
            scanned = basket.len(),
            "Checkout complete"
        );

        write_total(receipt.total, output)?;
        Ok(receipt.total)
    }
}
