//! File-backed catalog loader
//!
//! Reads the whole catalog file into memory and hands the bytes to
//! `json_format::decode_catalog`. Catalogs are a handful of records, so there is
//! no streaming.
//!
//! # Error Handling
//!
//! - Missing file: `CatalogNotFound`
//! - Any other read failure: `CatalogUnreadable`
//! - Undecodable contents: `CatalogMalformed`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::CatalogLoader;
use crate::io::json_format::decode_catalog;
use crate::types::{CheckoutError, Sku};

/// Catalog path used when none is given
pub const DEFAULT_CATALOG_PATH: &str = "prices.json";

/// Loads the catalog from a JSON file
///
/// # Examples
///
/// ```no_run
/// use checkout_engine::core::CatalogLoader;
/// use checkout_engine::io::FileCatalogLoader;
///
/// let loader = FileCatalogLoader::new("prices.json");
/// match loader.load() {
///     Ok(catalog) => println!("Loaded {} SKUs", catalog.len()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalogLoader {
    path: PathBuf,
}

impl FileCatalogLoader {
    /// Create a loader for the catalog at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog path this loader reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileCatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

impl CatalogLoader for FileCatalogLoader {
    fn load(&self) -> Result<Vec<Sku>, CheckoutError> {
        debug!(path = %self.path.display(), "Reading catalog");
        let bytes = fs::read(&self.path).map_err(|e| CheckoutError::catalog_read(&self.path, e))?;

        let catalog = decode_catalog(&bytes)?;
        info!(path = %self.path.display(), skus = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }
}
