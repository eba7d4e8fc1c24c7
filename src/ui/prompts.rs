//! ui::prompts
//!
//! Line-oriented input for the interactive shell.
//!
//! # Design
//!
//! Prompts read from an explicit reader and write to an explicit writer
//! rather than touching stdin/stdout directly, so the menu loop can be
//! driven by in-memory buffers in tests. Parsing and validation of the
//! returned line happen at the shell, which owns the error messages.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Print `message`, flush, and read one line of input.
///
/// The returned line is trimmed of surrounding whitespace. Returns
/// `Ok(None)` at end of input, which callers treat as a request to exit.
pub fn read_line(
    message: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>, PromptError> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
