//! SKU pricing records
//!
//! This module defines the catalog entry type and the per-SKU pricing rule that
//! turns a scanned quantity into a charged amount.

use serde::{Deserialize, Serialize};

use super::receipt::LineItem;

/// Price in the catalog's smallest unit (no currency, no decimals)
pub type Price = u64;

/// Number of scanned units
pub type Quantity = u64;

/// One catalog entry with its own pricing rule
///
/// Field names follow the catalog file format (`unitPrice`,
/// `specialPriceQuantity`, `specialPrice`). Missing numeric fields decode as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// Token naming the item in the scanned basket (usually one character)
    pub identifier: String,

    /// Price charged per unit absent any discount
    #[serde(default)]
    pub unit_price: Price,

    /// Units per bundle; 0 means no bulk discount is defined
    #[serde(default, rename = "specialPriceQuantity")]
    pub special_quantity: Quantity,

    /// Price of one bundle of `special_quantity` units
    #[serde(default)]
    pub special_price: Price,
}

impl Sku {
    /// Create a SKU without a bulk discount
    pub fn new(identifier: impl Into<String>, unit_price: Price) -> Self {
        Sku {
            identifier: identifier.into(),
            unit_price,
            special_quantity: 0,
            special_price: 0,
        }
    }

    /// Create a SKU where every `special_quantity` units cost `special_price`
    pub fn with_special(
        identifier: impl Into<String>,
        unit_price: Price,
        special_quantity: Quantity,
        special_price: Price,
    ) -> Self {
        Sku {
            identifier: identifier.into(),
            unit_price,
            special_quantity,
            special_price,
        }
    }

    /// Whether a bulk discount is defined for this SKU
    pub fn has_special(&self) -> bool {
        self.special_quantity > 0
    }

    /// Whether the bundle price is actually cheaper than buying units one by one
    ///
    /// Only meaningful for SKUs with a special; the engine never checks this.
    pub fn special_is_saving(&self) -> bool {
        self.special_price <= self.special_quantity.saturating_mul(self.unit_price)
    }

    /// Price `quantity` units of this SKU
    ///
    /// Full bundles are charged at `special_price`, the leftover units at
    /// `unit_price`. Arithmetic saturates instead of overflowing.
    pub fn price_quantity(&self, quantity: Quantity) -> LineItem {
        let (bundles, leftover) = if self.has_special() {
            (
                quantity / self.special_quantity,
                quantity % self.special_quantity,
            )
        } else {
            (0, quantity)
        };

        let bundle_total = bundles.saturating_mul(self.special_price);
        let unit_total = leftover.saturating_mul(self.unit_price);

        LineItem {
            identifier: self.identifier.clone(),
            quantity,
            bundles,
            leftover,
            bundle_total,
            unit_total,
            subtotal: bundle_total.saturating_add(unit_total),
        }
    }
}
