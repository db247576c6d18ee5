//! Fortytwo virtual machine — a line-addressed, Forth-derived stack
//! machine where every value is a 32-bit integer.
//!
//! The machine has:
//! - A data stack holding the program's working values
//! - A return stack of saved `(line, column)` frames
//! - Program memory: one ordered sequence of Cells per line number
//! - An instruction pointer stepping through program memory
//!
//! There is no separate call instruction. Pushing the literal `42`
//! pops an opcode from the data stack and dispatches it: small opcodes
//! run intrinsics, larger opcodes call the line with that number.
//! A line returns by running off its end.
//!
//! # Usage
//!
//! ```
//! use fortytwo_vm::{opcode, Runtime};
//!
//! let mut forth = Runtime::new();
//! forth.push_data(2).unwrap();
//! forth.push_data(3).unwrap();
//! forth.push_data(opcode::PLUS).unwrap();
//! forth.push_data(opcode::CALL).unwrap();
//! assert_eq!(forth.data_stack(), &[5]);
//! ```

pub mod error;
pub mod opcode;
pub mod runtime;

mod intrinsics;

pub use error::RuntimeError;
pub use runtime::Runtime;

/// The machine's single scalar value type, used simultaneously as
/// literal data, as an opcode selector, and as a line-number address.
pub type Cell = i32;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Push both operands raw, then dispatch the intrinsic through the
    /// magic-call path.
    fn binary_result(a: Cell, b: Cell, op: Cell) -> Cell {
        let mut forth = Runtime::new();
        forth.push_data_no_exec(a);
        forth.push_data_no_exec(b);
        forth.push_data_no_exec(op);
        forth.push_data(opcode::CALL).unwrap();
        let result = forth.pop_data().unwrap();
        assert_eq!(forth.data_stack(), &[] as &[Cell]);
        result
    }

    /// Strategy for a user-programmable line number.
    fn arb_user_line() -> impl Strategy<Value = Cell> {
        (opcode::FIRST_USER..500).prop_filter("not the call line", |l| *l != opcode::CALL)
    }

    proptest! {
        /// plus matches wrapping addition regardless of operand order.
        #[test]
        fn plus_is_wrapping_add(a in any::<Cell>(), b in any::<Cell>()) {
            prop_assert_eq!(binary_result(a, b, opcode::PLUS), a.wrapping_add(b));
            prop_assert_eq!(binary_result(b, a, opcode::PLUS), a.wrapping_add(b));
        }

        /// minus subtracts the first-popped value from the second.
        #[test]
        fn minus_is_second_minus_first(a in any::<Cell>(), b in any::<Cell>()) {
            prop_assert_eq!(binary_result(a, b, opcode::MINUS), a.wrapping_sub(b));
        }

        /// Quotient and remainder reconstruct the dividend.
        #[test]
        fn div_mod_reconstruct(
            b in any::<Cell>(),
            a in any::<Cell>().prop_filter("nonzero divisor", |a| *a != 0),
        ) {
            let q = binary_result(b, a, opcode::DIV);
            let r = binary_result(b, a, opcode::MOD);
            prop_assert_eq!(q.wrapping_mul(a).wrapping_add(r), b);
        }

        /// push_data_no_exec never dispatches; the stack mirrors the
        /// pushed sequence exactly, magic values included.
        #[test]
        fn push_no_exec_preserves_order(values in prop::collection::vec(any::<Cell>(), 0..64)) {
            let mut forth = Runtime::new();
            for &v in &values {
                forth.push_data_no_exec(v);
            }
            prop_assert_eq!(forth.data_stack(), values.as_slice());
        }

        /// Compiling into a user line reads back exactly what went in.
        #[test]
        fn compile_roundtrip(
            line in arb_user_line(),
            values in prop::collection::vec(any::<Cell>(), 0..32),
        ) {
            let mut forth = Runtime::new();
            for &v in &values {
                forth.compile(line, v);
            }
            prop_assert_eq!(forth.line_instructions(line), values.as_slice());
            prop_assert_eq!(forth.instruction_count(line), values.len());
        }

        /// Reserved targets (below FIRST_USER, negative, or the call
        /// line itself) never receive compiled cells.
        #[test]
        fn compile_ignores_reserved_lines(value in any::<Cell>()) {
            let mut forth = Runtime::new();
            for line in -2..opcode::FIRST_USER {
                forth.compile(line, value);
            }
            forth.compile(opcode::CALL, value);
            prop_assert_eq!(forth.line_count(), 0);
        }
    }
}
