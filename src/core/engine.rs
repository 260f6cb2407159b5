//! Pricing engine
//!
//! This module provides the PricingEngine that prices a basket against a catalog.
//!
//! The engine applies, for every catalog record in catalog order:
//! - Count the record's identifier in the basket
//! - Charge full bundles at the special price (when a special is defined)
//! - Charge the leftover units at the unit price
//!
//! Unknown characters in the basket match no record and contribute nothing.
//! Duplicate identifiers in the catalog each contribute their own line.

use tracing::debug;

use crate::core::basket::Basket;
use crate::types::{LineItem, Price, Receipt, Sku};

/// Single-threaded pricing engine
///
/// Borrows the catalog for the duration of one calculation. Pricing is a pure
/// function of the catalog and the basket.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    catalog: &'a [Sku],
}

impl<'a> PricingEngine<'a> {
    /// Create a PricingEngine over `catalog`
    pub fn new(catalog: &'a [Sku]) -> Self {
        PricingEngine { catalog }
    }

    /// Price a basket
    ///
    /// # Returns
    ///
    /// A `Receipt` with one line per catalog record (in catalog order) and the
    /// total. Never fails: an empty catalog or an empty basket yields total 0.
    pub fn price(&self, basket: &Basket) -> Receipt {
        let lines: Vec<LineItem> = self
            .catalog
            .iter()
            .map(|sku| price_line(sku, basket))
            .collect();

        let receipt = Receipt::from_lines(lines);
        debug!(
            skus = self.catalog.len(),
            scanned = basket.len(),
            matched = receipt.matched_units(),
            total = receipt.total,
            "Priced basket"
        );
        receipt
    }

    /// Price a basket and return only the total
    pub fn total(&self, basket: &Basket) -> Price {
        self.price(basket).total
    }
}

/// Price one catalog record against the basket
pub fn price_line(sku: &Sku, basket: &Basket) -> LineItem {
    let line = sku.price_quantity(basket.count(&sku.identifier));
    debug!(
        identifier = %line.identifier,
        quantity = line.quantity,
        bundles = line.bundles,
        leftover = line.leftover,
        subtotal = line.subtotal,
        "Priced SKU"
    );
    line
}

/// Compute the total owed for `scanned` against `catalog`
///
/// Convenience entry point over [`PricingEngine`].
pub fn compute_total(catalog: &[Sku], scanned: &str) -> Price {
    PricingEngine::new(catalog).total(&Basket::new(scanned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn discount_catalog() -> Vec<Sku> {
        vec![Sku::with_special("A", 50, 3, 130), Sku::new("C", 20)]
    }

    #[fixture]
    fn kata_catalog() -> Vec<Sku> {
        vec![
            Sku::with_special("A", 50, 3, 130),
            Sku::with_special("B", 30, 2, 45),
            Sku::new("C", 20),
            Sku::new("D", 15),
        ]
    }

    #[test]
    fn test_no_discount_totals() {
        let catalog = vec![Sku::new("D", 15), Sku::new("C", 20)];
        assert_eq!(compute_total(&catalog, "DDDDDCCC"), 135);
    }

    #[rstest]
    fn test_discount_totals(discount_catalog: Vec<Sku>) {
        assert_eq!(compute_total(&discount_catalog, "AAAAACCC"), 290);
    }

    #[rstest]
    fn test_noise_is_ignored(discount_catalog: Vec<Sku>) {
        assert_eq!(compute_total(&discount_catalog, "AAAAACCC42bob"), 290);
    }

    #[rstest]
    #[case::empty("")]
    #[case::noise_only("xyz 123")]
    #[case::lowercase("aaaccc")]
    fn test_unmatched_basket_totals_zero(discount_catalog: Vec<Sku>, #[case] scanned: &str) {
        assert_eq!(compute_total(&discount_catalog, scanned), 0);
    }

    #[rstest]
    #[case::empty("")]
    #[case::items("AAAAACCC")]
    fn test_empty_catalog_totals_zero(#[case] scanned: &str) {
        assert_eq!(compute_total(&[], scanned), 0);
    }

    #[rstest]
    #[case::empty("")]
    #[case::single("A")]
    #[case::mixed("BAB")]
    #[case::full("AAABBCDD")]
    fn test_appending_unknown_tokens_keeps_total(kata_catalog: Vec<Sku>, #[case] scanned: &str) {
        let with_noise = format!("{}zz9!?", scanned);
        assert_eq!(
            compute_total(&kata_catalog, scanned),
            compute_total(&kata_catalog, &with_noise)
        );
    }

    #[rstest]
    #[case::grouped("AAAAABBBCCD")]
    #[case::interleaved("ABCABDACABA")]
    #[case::reversed("DCCBBBAAAAA")]
    fn test_order_independence(kata_catalog: Vec<Sku>, #[case] scanned: &str) {
        // 5 A = 130 + 100, 3 B = 45 + 30, 2 C = 40, 1 D = 15
        assert_eq!(compute_total(&kata_catalog, scanned), 360);
    }

    #[rstest]
    fn test_exact_bundle_boundary(discount_catalog: Vec<Sku>) {
        let receipt = PricingEngine::new(&discount_catalog).price(&Basket::new("AAA"));
        let line = &receipt.lines[0];

        assert_eq!(line.bundles, 1);
        assert_eq!(line.leftover, 0);
        assert_eq!(line.unit_total, 0);
        assert_eq!(receipt.total, 130);
    }

    #[rstest]
    fn test_receipt_lines_follow_catalog_order(kata_catalog: Vec<Sku>) {
        let receipt = PricingEngine::new(&kata_catalog).price(&Basket::new("DCBA"));
        let identifiers: Vec<&str> = receipt
            .lines
            .iter()
            .map(|line| line.identifier.as_str())
            .collect();

        assert_eq!(identifiers, vec!["A", "B", "C", "D"]);
        assert_eq!(receipt.total, 115);
    }

    #[test]
    fn test_duplicate_identifiers_sum_contributions() {
        let catalog = vec![Sku::new("A", 10), Sku::with_special("A", 50, 2, 70)];
        // 10 * 3 + (70 + 50)
        assert_eq!(compute_total(&catalog, "AAA"), 150);
    }

    #[test]
    fn test_multi_character_identifiers() {
        let catalog = vec![Sku::with_special("AB", 10, 2, 15), Sku::new("C", 1)];
        // "AB" occurs 3 times: one bundle (15) and one unit (10); "C" twice
        assert_eq!(compute_total(&catalog, "ABABCABC"), 27);
    }

    #[test]
    fn test_empty_identifier_matches_nothing() {
        let catalog = vec![Sku::new("", 100), Sku::new("A", 1)];
        assert_eq!(compute_total(&catalog, "AA"), 2);
    }
}
