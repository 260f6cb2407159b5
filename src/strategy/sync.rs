//! Synchronous pricing strategy
//!
//! Single-threaded pricing straight through `PricingEngine`. This is the
//! default: catalogs are a handful of SKUs and baskets a handful of items.

use crate::core::{Basket, PricingEngine};
use crate::strategy::PricingStrategy;
use crate::types::{CheckoutError, Receipt, Sku};

/// Synchronous pricing strategy
///
/// # Examples
///
/// ```
/// use checkout_engine::core::Basket;
/// use checkout_engine::strategy::{PricingStrategy, SyncPricingStrategy};
/// use checkout_engine::types::Sku;
///
/// let catalog = vec![Sku::with_special("A", 50, 3, 130), Sku::new("C", 20)];
/// let receipt = SyncPricingStrategy
///     .price(&catalog, &Basket::new("AAAAACCC"))
///     .unwrap();
/// assert_eq!(receipt.total, 290);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncPricingStrategy;

impl PricingStrategy for SyncPricingStrategy {
    fn price(&self, catalog: &[Sku], basket: &Basket) -> Result<Receipt, CheckoutError> {
        Ok(PricingEngine::new(catalog).price(basket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_strategy_prices_basket() {
        let catalog = vec![Sku::new("D", 15), Sku::new("C", 20)];
        let receipt = SyncPricingStrategy
            .price(&catalog, &Basket::new("DDDDDCCC"))
            .unwrap();

        assert_eq!(receipt.total, 135);
        assert_eq!(receipt.lines.len(), 2);
    }

    #[test]
    fn test_sync_strategy_empty_catalog() {
        let receipt = SyncPricingStrategy
            .price(&[], &Basket::new("AAA"))
            .unwrap();
        assert_eq!(receipt, Receipt::default());
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncPricingStrategy>();
    }
}
