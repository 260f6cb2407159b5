//! Pricing results
//!
//! A `Receipt` is the full breakdown of one basket: one `LineItem` per catalog
//! record, in catalog order, and the grand total.

use super::sku::{Price, Quantity};

/// Charge for one catalog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Identifier of the priced SKU
    pub identifier: String,

    /// Units of this SKU found in the basket
    pub quantity: Quantity,

    /// Full bundles charged at the special price
    pub bundles: Quantity,

    /// Units left after bundling, charged at the unit price
    pub leftover: Quantity,

    /// `bundles * special_price`
    pub bundle_total: Price,

    /// `leftover * unit_price`
    pub unit_total: Price,

    /// `bundle_total + unit_total`
    pub subtotal: Price,
}

/// Priced basket
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    /// Line items in catalog order
    pub lines: Vec<LineItem>,

    /// Sum of all line subtotals
    pub total: Price,
}

impl Receipt {
    /// Build a receipt from line items already in catalog order
    pub fn from_lines(lines: Vec<LineItem>) -> Self {
        let total = lines
            .iter()
            .fold(0, |acc: Price, line| acc.saturating_add(line.subtotal));
        Receipt { lines, total }
    }

    /// Total number of basket units matched by some catalog record
    pub fn matched_units(&self) -> Quantity {
        self.lines
            .iter()
            .fold(0, |acc: Quantity, line| acc.saturating_add(line.quantity))
    }
}
