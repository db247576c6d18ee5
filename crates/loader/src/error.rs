//! Parse errors for Fortytwo source text.

use thiserror::Error;

/// Errors produced while compiling source text into program memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A token on a program line did not parse as an integer. The
    /// excerpt is capped at ten characters.
    #[error("{file}({line}): not a number at '{excerpt}'")]
    NotANumber {
        file: String,
        line: usize,
        excerpt: String,
    },
}
