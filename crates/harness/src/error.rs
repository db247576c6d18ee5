//! Parse errors for harness case files.

use fortytwo_vm::Cell;
use thiserror::Error;

/// Errors produced while parsing a `.f42t` case file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// A non-comment line shorter than a leader plus a space.
    #[error("{file}:{line}: missing line leader")]
    MissingLeader { file: String, line: usize },

    /// The character after the leader was not a space.
    #[error("{file}:{line}: missing space after line leader")]
    MissingSpace { file: String, line: usize },

    /// An unrecognized leader character.
    #[error("{file}:{line}: bad line leader '{leader}'")]
    BadLeader {
        file: String,
        line: usize,
        leader: char,
    },

    /// A `@`, `^`, or `v` directive before any `=` line.
    #[error("{file}:{line}: no test declared")]
    NoTestDeclared { file: String, line: usize },

    /// The `@` parameter did not parse as a line number.
    #[error("{file}:{line}: can't parse start line '{token}'")]
    BadStartLine {
        file: String,
        line: usize,
        token: String,
    },

    /// The `@` parameter named a reserved line.
    #[error("{file}:{line}: start line {start} is below the user range")]
    StartLineTooLow {
        file: String,
        line: usize,
        start: Cell,
    },

    /// A `^` or `v` parameter did not parse as an integer.
    #[error("{file}:{line}: can't parse number '{token}'")]
    BadNumber {
        file: String,
        line: usize,
        token: String,
    },

    /// A test case reached the end of the file without an `@` line.
    #[error("{file}: test case '{name}' has no start line")]
    MissingStartLine { file: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(
            HarnessError::NoTestDeclared {
                file: "cases.f42t".to_string(),
                line: 1,
            }
            .to_string(),
            "cases.f42t:1: no test declared"
        );
        assert_eq!(
            HarnessError::StartLineTooLow {
                file: "cases.f42t".to_string(),
                line: 2,
                start: 12,
            }
            .to_string(),
            "cases.f42t:2: start line 12 is below the user range"
        );
        assert_eq!(
            HarnessError::MissingStartLine {
                file: "cases.f42t".to_string(),
                name: "plus".to_string(),
            }
            .to_string(),
            "cases.f42t: test case 'plus' has no start line"
        );
    }
}
