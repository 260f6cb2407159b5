//! Scanned basket
//!
//! Wraps the raw scanned line and precomputes a character frequency table, so
//! single-character identifiers are counted in one pass over the basket instead
//! of one pass per SKU.

use std::collections::HashMap;

use crate::types::Quantity;

/// One line of scanned item codes, ready for counting
///
/// The raw text is kept unvalidated: characters that match no identifier are
/// simply never counted.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    raw: String,
    frequencies: HashMap<char, Quantity>,
}

impl Basket {
    /// Build a basket from the scanned line
    pub fn new(scanned: impl Into<String>) -> Self {
        let raw = scanned.into();
        let mut frequencies: HashMap<char, Quantity> = HashMap::new();
        for c in raw.chars() {
            *frequencies.entry(c).or_default() += 1;
        }

        Basket { raw, frequencies }
    }

    /// The scanned line as given
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of scanned characters, matched or not
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Count the occurrences of `identifier` in the basket
    ///
    /// Single-character identifiers read the frequency table. Longer identifiers
    /// count non-overlapping matches scanning left to right. An empty identifier
    /// matches nothing.
    pub fn count(&self, identifier: &str) -> Quantity {
        let mut chars = identifier.chars();
        match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some(c), None) => self.frequencies.get(&c).copied().unwrap_or(0),
            _ => self.raw.matches(identifier).count() as Quantity,
        }
    }
}

impl From<&str> for Basket {
    fn from(scanned: &str) -> Self {
        Basket::new(scanned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single_char("AAAAACCC", "A", 5)]
    #[case::interleaved("ACACA", "A", 3)]
    #[case::absent("AAAAACCC", "B", 0)]
    #[case::empty_basket("", "A", 0)]
    #[case::empty_identifier("AAA", "", 0)]
    #[case::case_sensitive("aaA", "A", 1)]
    #[case::multi_char("XYXYZ", "XY", 2)]
    #[case::non_overlapping("AAAA", "AA", 2)]
    #[case::non_overlapping_odd("AAA", "AA", 1)]
    #[case::multibyte("ééa", "é", 2)]
    fn test_count(#[case] scanned: &str, #[case] identifier: &str, #[case] expected: Quantity) {
        let basket = Basket::new(scanned);
        assert_eq!(basket.count(identifier), expected);
    }

    #[test]
    fn test_single_char_count_matches_substring_count() {
        let basket = Basket::new("AAAAACCC42bob");
        for identifier in ["A", "C", "4", "b", "z"] {
            assert_eq!(
                basket.count(identifier),
                basket.as_str().matches(identifier).count() as Quantity
            );
        }
    }

    #[test]
    fn test_len_counts_characters() {
        let basket = Basket::from("ééa");
        assert_eq!(basket.len(), 3);
        assert!(!basket.is_empty());
        assert!(Basket::default().is_empty());
    }
}
