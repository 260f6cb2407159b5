use crate::io::DEFAULT_CATALOG_PATH;
use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Price a basket of scanned items against a price catalog
#[derive(Parser, Debug)]
#[command(name = "checkout")]
#[command(about = "Price a basket of scanned items against a price catalog", long_about = None)]
pub struct CliArgs {
    /// Catalog JSON file path
    #[arg(
        long = "catalog",
        value_name = "PATH",
        default_value = DEFAULT_CATALOG_PATH,
        help = "Path to the JSON price catalog"
    )]
    pub catalog: PathBuf,

    /// Pricing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Pricing strategy: 'sync' for single-threaded or 'async' for batched tasks"
    )]
    pub strategy: StrategyType,

    /// Number of catalog records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of catalog records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Batches priced at once, also the worker thread count (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum batches priced at once (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available pricing strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to defaults; zero values are replaced by the
    /// defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size()),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches()),
            )
        } else {
            BatchConfig::default()
        }
    }
}
