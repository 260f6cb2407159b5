//! Core traits for the collaborators around the pricing engine
//!
//! The session driver depends on these abstractions rather than on files and
//! stdin directly, so tests can substitute in-memory fakes.

use crate::types::{CheckoutError, Sku};

/// Source of the SKU price list
pub trait CatalogLoader {
    /// Load and decode the full catalog
    ///
    /// A failure here is fatal to the run; no pricing happens.
    fn load(&self) -> Result<Vec<Sku>, CheckoutError>;
}

/// Interactive source of the scanned basket line
pub trait LineReader {
    /// Show `prompt` to the operator and read one line of input
    ///
    /// The returned line has its trailing line terminator removed.
    fn read_line(&mut self, prompt: &str) -> Result<String, CheckoutError>;
}

/// An already decoded catalog acts as its own loader
impl CatalogLoader for Vec<Sku> {
    fn load(&self) -> Result<Vec<Sku>, CheckoutError> {
        Ok(self.clone())
    }
}
