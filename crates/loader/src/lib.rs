//! Loader for Fortytwo source text.
//!
//! A source file is newline-delimited; file line N compiles directly
//! into program-memory line N. Lines numbered below `FIRST_USER` and
//! the line numbered `CALL` are reserved header lines and skipped
//! without inspection. Blank lines and lines whose first non-space
//! character is `#` are comments. Every other line is tokenized as
//! whitespace-separated integers and appended in order through
//! [`Runtime::compile`].
//!
//! # Usage
//!
//! ```
//! use fortytwo_loader::load_str;
//! use fortytwo_vm::Runtime;
//!
//! let source = format!("{}2 3 0 42", "\n".repeat(20));
//! let mut forth = Runtime::new();
//! load_str(&source, "demo.f42", &mut forth).unwrap();
//! assert_eq!(forth.instruction_count(21), 4);
//! ```

pub mod error;

pub use error::LoadError;

use fortytwo_vm::{opcode, Cell, Runtime};

/// Longest stretch of an offending token quoted in a parse error.
const EXCERPT_LEN: usize = 10;

/// Compile source text into the runtime's program memory.
///
/// Returns the first error encountered; program memory holds
/// everything compiled up to that point.
pub fn load_str(text: &str, file: &str, forth: &mut Runtime) -> Result<(), LoadError> {
    for (idx, line) in text.lines().enumerate() {
        compile_line(line, idx + 1, file, forth)?;
    }
    Ok(())
}

fn compile_line(
    line: &str,
    line_no: usize,
    file: &str,
    forth: &mut Runtime,
) -> Result<(), LoadError> {
    let row = line_no as Cell;
    if row < opcode::FIRST_USER || row == opcode::CALL {
        return Ok(());
    }

    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    for token in trimmed.split_whitespace() {
        let value: Cell = token.parse().map_err(|_| LoadError::NotANumber {
            file: file.to_string(),
            line: line_no,
            excerpt: token.chars().take(EXCERPT_LEN).collect(),
        })?;
        forth.compile(row, value);
    }

    Ok(())
}
