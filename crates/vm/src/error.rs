//! Runtime errors for the Fortytwo VM.
//!
//! Every variant carries the source file name and the instruction
//! pointer's line for diagnostics. None of these are recoverable by
//! the Runtime itself; the driver reports them and stops.

use crate::Cell;
use thiserror::Error;

/// Errors that stop a running program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Pop on an empty data stack, or an intrinsic short of operands.
    /// `context` names the operation that came up short.
    #[error("{file}({line}): data stack underflow in {context}")]
    DataUnderflow {
        file: String,
        line: Cell,
        context: &'static str,
    },

    /// Pop on an empty return stack: a line ran off its end with no
    /// saved frame to return to.
    #[error("{file}({line}): return stack underflow")]
    ReturnUnderflow { file: String, line: Cell },

    /// `div` or `mod` with a zero divisor.
    #[error("{file}({line}): division by zero")]
    DivisionByZero { file: String, line: Cell },
}
