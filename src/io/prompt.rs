//! Interactive basket input
//!
//! `PromptReader` writes a prompt, then reads one line. It is generic over its
//! input and output so tests drive it with in-memory buffers.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use tracing::debug;

use crate::core::LineReader;
use crate::types::CheckoutError;

/// Instruction shown before reading the basket
pub const SCAN_PROMPT: &str = "Enter the scanned item codes (e.g. AABCD) and press enter:";

/// Prompting line reader over any buffered input and writer
#[derive(Debug)]
pub struct PromptReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the wrapped output (useful to inspect prompts in tests)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl PromptReader<StdinLock<'static>, Stdout> {
    /// Prompt on stdout and read from stdin
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineReader for PromptReader<R, W> {
    /// Read one line; end of input reads as an empty line
    fn read_line(&mut self, prompt: &str) -> Result<String, CheckoutError> {
        writeln!(self.output, "{}", prompt).map_err(CheckoutError::output)?;
        self.output.flush().map_err(CheckoutError::output)?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(CheckoutError::input)?;
        if read == 0 {
            debug!("End of input before any scanned items");
        }

        // invalid bytes become U+FFFD, which matches no identifier
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
