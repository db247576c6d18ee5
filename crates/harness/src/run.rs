//! Case execution: clone the loaded Runtime, seed the input stack, run
//! to the sentinel instruction-pointer position, diff the data stack.

use fortytwo_vm::{Cell, Runtime, RuntimeError};

use crate::parse::TestCase;

/// Upper bound on steps per case. A case that exceeds it is reported
/// as [`CaseOutcome::StepLimit`] instead of hanging the harness.
pub const STEP_LIMIT: usize = 1_000_000;

/// The result of running one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass,
    /// The final data stack differed from the expectation.
    Mismatch {
        expected: Vec<Cell>,
        actual: Vec<Cell>,
    },
    /// The program raised a runtime error mid-case.
    Runtime(RuntimeError),
    /// The program did not reach the sentinel within [`STEP_LIMIT`].
    StepLimit,
}

/// A named outcome, one per case in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    pub outcome: CaseOutcome,
}

/// Run a single case against a runtime that already holds the program.
///
/// The sentinel is the start line run off its own end: the instruction
/// pointer at `(start_line, instruction_count(start_line))`. The
/// return that would fire there is deliberately not taken; with an
/// empty return stack it would underflow.
pub fn run_case(loaded: &Runtime, case: &TestCase) -> CaseOutcome {
    let mut forth = loaded.clone();
    for &value in &case.input {
        forth.push_data_no_exec(value);
    }
    forth.reset_ip(case.start_line);
    let sentinel_col = forth.instruction_count(case.start_line) as Cell;

    let mut steps = 0;
    while !forth.ip_at(case.start_line, sentinel_col) {
        if steps == STEP_LIMIT {
            return CaseOutcome::StepLimit;
        }
        if let Err(e) = forth.step() {
            return CaseOutcome::Runtime(e);
        }
        steps += 1;
    }

    if forth.data_stack() == case.expected.as_slice() {
        CaseOutcome::Pass
    } else {
        CaseOutcome::Mismatch {
            expected: case.expected.clone(),
            actual: forth.data_stack().to_vec(),
        }
    }
}

/// Run every case against the same loaded program.
pub fn run_cases(loaded: &Runtime, cases: &[TestCase]) -> Vec<CaseResult> {
    cases
        .iter()
        .map(|case| CaseResult {
            name: case.name.clone(),
            outcome: run_case(loaded, case),
        })
        .collect()
}
