//! JSON format handling for the price catalog
//!
//! The catalog is a JSON array of objects:
//!
//! ```json
//! [
//!   { "identifier": "A", "unitPrice": 50, "specialPriceQuantity": 3, "specialPrice": 130 },
//!   { "identifier": "C", "unitPrice": 20 }
//! ]
//! ```
//!
//! All functions are pure (no I/O) for easy testing.

use std::collections::HashSet;

use tracing::warn;

use crate::types::{CheckoutError, Sku};

/// Decode raw catalog bytes into SKU records
///
/// Missing numeric fields default to 0 and unknown fields are ignored.
/// Negative or fractional prices do not decode.
///
/// # Returns
///
/// * `Ok(Vec<Sku>)` - records in file order
/// * `Err(CheckoutError::CatalogMalformed)` - with line/column when available
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<Sku>, CheckoutError> {
    let catalog: Vec<Sku> = serde_json::from_slice(bytes)?;
    check_catalog(&catalog);
    Ok(catalog)
}

/// Log data-quality problems in a decoded catalog
///
/// Nothing here rejects a record: duplicates and specials that cost more than
/// the units they bundle are priced as written.
///
/// # Returns
///
/// The number of problems found.
pub fn check_catalog(catalog: &[Sku]) -> usize {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut problems = 0;

    for sku in catalog {
        if !seen.insert(sku.identifier.as_str()) {
            warn!(identifier = %sku.identifier, "Duplicate identifier in catalog; contributions will be summed");
            problems += 1;
        }

        if sku.identifier.is_empty() {
            warn!("Empty identifier in catalog; it will never match");
            problems += 1;
        }

        if sku.has_special() && !sku.special_is_saving() {
            warn!(
                identifier = %sku.identifier,
                unit_price = sku.unit_price,
                special_quantity = sku.special_quantity,
                special_price = sku.special_price,
                "Special price is not a saving"
            );
            problems += 1;
        }
    }

    problems
}
