//! Pricing strategy module
//!
//! This module defines the Strategy pattern for pricing a basket. Each SKU's
//! contribution is independent of the others, so the catalog can be priced
//! sequentially or in concurrent batches; both strategies produce the same
//! receipt, and the implementation is selected at runtime.

use crate::cli::StrategyType;
use crate::core::Basket;
use crate::types::{CheckoutError, Receipt, Sku};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncPricingStrategy, BatchConfig};
pub use sync::SyncPricingStrategy;

/// Pricing strategy trait
///
/// Implementations price `basket` against `catalog` and return the full
/// receipt, lines in catalog order.
pub trait PricingStrategy: Send + Sync {
    /// Price one basket
    ///
    /// # Errors
    ///
    /// Pricing itself never fails. Only strategy infrastructure can (for example
    /// the async runtime failing to start).
    fn price(&self, catalog: &[Sku], basket: &Basket) -> Result<Receipt, CheckoutError>;
}

/// Create a pricing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of pricing strategy to create (Sync or Async)
/// * `config` - Optional batch configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn PricingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncPricingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncPricingStrategy::new(config))
        }
    }
}
