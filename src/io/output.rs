//! Total output
//!
//! The total is printed as a bare integer: no currency symbol, no decimals.

use std::io::Write;

use crate::types::{CheckoutError, Price};

/// Write `total` followed by a newline
pub fn write_total(total: Price, output: &mut dyn Write) -> Result<(), CheckoutError> {
    writeln!(output, "{}", total).map_err(CheckoutError::output)?;
    output.flush().map_err(CheckoutError::output)
}
