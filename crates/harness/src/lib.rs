//! Fortytwo test harness — drives the VM from externally supplied
//! input stacks and diffs the resulting data stack against an
//! expectation.
//!
//! A case file declares named cases with a start line, an optional
//! initial data stack, and the expected final stack. Each case runs on
//! its own clone of the loaded Runtime until the start line runs off
//! its end.
//!
//! # Usage
//!
//! ```
//! use fortytwo_harness::{parse_cases, run_cases, CaseOutcome};
//! use fortytwo_loader::load_str;
//! use fortytwo_vm::Runtime;
//!
//! let program = format!("{}2 3 0 42", "\n".repeat(20));
//! let mut forth = Runtime::new();
//! load_str(&program, "math.f42", &mut forth).unwrap();
//!
//! let cases = parse_cases("= plus\n@ 21\nv 5\n", "math.f42t").unwrap();
//! let results = run_cases(&forth, &cases);
//! assert_eq!(results[0].outcome, CaseOutcome::Pass);
//! ```

pub mod error;
pub mod parse;
pub mod run;

pub use error::HarnessError;
pub use parse::{parse_cases, TestCase};
pub use run::{run_case, run_cases, CaseOutcome, CaseResult, STEP_LIMIT};
