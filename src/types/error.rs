//! Error types for the checkout engine
//!
//! Errors only originate around the pricing core: loading the catalog, reading
//! the basket line, writing the total. Pricing itself never fails.
//!
//! # Error Categories
//!
//! - **Catalog Errors**: file missing, unreadable, or not a valid price list
//! - **Session I/O Errors**: prompt/input/output failures
//! - **Runtime Errors**: the async pricing runtime could not start

use std::path::Path;
use thiserror::Error;

/// Main error type for the checkout engine
///
/// Every variant carries its context as strings so the error stays `Clone` and
/// comparable in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    /// Catalog file does not exist
    ///
    /// Fatal: the run aborts before the basket is requested.
    #[error("Catalog not found: {path}")]
    CatalogNotFound {
        /// The path that was not found
        path: String,
    },

    /// Catalog file exists but could not be read (permissions, is a directory, ...)
    #[error("Failed to read catalog '{path}': {message}")]
    CatalogUnreadable {
        /// The catalog path
        path: String,
        /// Description of the read failure
        message: String,
    },

    /// Catalog contents could not be decoded into SKU records
    #[error("Malformed catalog{}: {message}", line.map(|l| format!(" at line {}, column {}", l, column.unwrap_or(0))).unwrap_or_default())]
    CatalogMalformed {
        /// Line of the decode failure (if available)
        line: Option<usize>,
        /// Column of the decode failure (if available)
        column: Option<usize>,
        /// Description of the decode failure
        message: String,
    },

    /// The basket line could not be read
    #[error("Failed to read scanned items: {message}")]
    InputError {
        /// Description of the input failure
        message: String,
    },

    /// The prompt or the total could not be written
    #[error("Failed to write output: {message}")]
    OutputError {
        /// Description of the output failure
        message: String,
    },

    /// The async pricing runtime could not be created
    #[error("Failed to start pricing runtime: {message}")]
    RuntimeError {
        /// Description of the runtime failure
        message: String,
    },
}

// Conversion from serde_json::Error to CheckoutError
impl From<serde_json::Error> for CheckoutError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports line 0 when no position applies
        let (line, column) = if error.line() > 0 {
            (Some(error.line()), Some(error.column()))
        } else {
            (None, None)
        };

        CheckoutError::CatalogMalformed {
            line,
            column,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CheckoutError {
    /// Classify a failure to read the catalog file at `path`
    pub fn catalog_read(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            CheckoutError::CatalogNotFound {
                path: path.display().to_string(),
            }
        } else {
            CheckoutError::CatalogUnreadable {
                path: path.display().to_string(),
                message: error.to_string(),
            }
        }
    }

    /// Create an InputError
    pub fn input(error: impl std::fmt::Display) -> Self {
        CheckoutError::InputError {
            message: error.to_string(),
        }
    }

    /// Create an OutputError
    pub fn output(error: impl std::fmt::Display) -> Self {
        CheckoutError::OutputError {
            message: error.to_string(),
        }
    }

    /// Create a RuntimeError
    pub fn runtime(error: impl std::fmt::Display) -> Self {
        CheckoutError::RuntimeError {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Error, ErrorKind};

    #[rstest]
    #[case::catalog_not_found(
        CheckoutError::CatalogNotFound { path: "prices.json".to_string() },
        "Catalog not found: prices.json"
    )]
    #[case::catalog_unreadable(
        CheckoutError::CatalogUnreadable { path: "prices.json".to_string(), message: "Permission denied".to_string() },
        "Failed to read catalog 'prices.json': Permission denied"
    )]
    #[case::malformed_with_position(
        CheckoutError::CatalogMalformed { line: Some(3), column: Some(14), message: "expected value".to_string() },
        "Malformed catalog at line 3, column 14: expected value"
    )]
    #[case::malformed_without_position(
        CheckoutError::CatalogMalformed { line: None, column: None, message: "expected value".to_string() },
        "Malformed catalog: expected value"
    )]
    #[case::input_error(
        CheckoutError::InputError { message: "stream closed".to_string() },
        "Failed to read scanned items: stream closed"
    )]
    #[case::output_error(
        CheckoutError::OutputError { message: "broken pipe".to_string() },
        "Failed to write output: broken pipe"
    )]
    #[case::runtime_error(
        CheckoutError::RuntimeError { message: "no threads".to_string() },
        "Failed to start pricing runtime: no threads"
    )]
    fn test_error_display(#[case] error: CheckoutError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(ErrorKind::NotFound, true)]
    #[case::permission_denied(ErrorKind::PermissionDenied, false)]
    fn test_catalog_read_classification(#[case] kind: ErrorKind, #[case] not_found: bool) {
        let error = CheckoutError::catalog_read(Path::new("prices.json"), Error::new(kind, "boom"));
        assert_eq!(
            matches!(error, CheckoutError::CatalogNotFound { .. }),
            not_found
        );
    }

    #[test]
    fn test_serde_json_error_conversion_keeps_position() {
        let json_error = serde_json::from_str::<Vec<u32>>("[1,\n  x]").unwrap_err();
        let error: CheckoutError = json_error.into();

        match error {
            CheckoutError::CatalogMalformed { line, column, .. } => {
                assert_eq!(line, Some(2));
                assert!(column.is_some());
            }
            other => panic!("Expected CatalogMalformed, got {:?}", other),
        }
    }
}
