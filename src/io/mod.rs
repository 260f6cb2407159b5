//! I/O module
//!
//! Handles catalog loading, the basket prompt and the printed total.
//!
//! # Components
//!
//! - `json_format` - Catalog JSON decoding and data-quality checks
//! - `catalog_file` - File-backed `CatalogLoader`
//! - `prompt` - Prompting `LineReader`
//! - `output` - Total output

pub mod catalog_file;
pub mod json_format;
pub mod output;
pub mod prompt;

pub use catalog_file::{FileCatalogLoader, DEFAULT_CATALOG_PATH};
pub use json_format::{check_catalog, decode_catalog};
pub use output::write_total;
pub use prompt::{PromptReader, SCAN_PROMPT};
