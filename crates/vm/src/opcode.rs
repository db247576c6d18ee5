//! Opcode constants for the Fortytwo instruction space.
//!
//! Opcodes are ordinary [`Cell`]s. A non-negative Cell below
//! [`FIRST_USER`] names an intrinsic; a Cell at or above it names a
//! program line; [`CALL`] is the magic value whose push triggers
//! dispatch. The same Cell pushed through the non-executing path is
//! plain data.

use crate::Cell;

/// (a b -- a+b) integer addition.
pub const PLUS: Cell = 0;
/// (a b -- b-a) the first-popped value is the subtrahend.
pub const MINUS: Cell = 1;
/// (a b -- a*b) integer multiplication.
pub const MULT: Cell = 2;
/// (a b -- b/a) integer division, first-popped is the divisor.
pub const DIV: Cell = 3;
/// (a b -- b%a) integer remainder, first-popped is the divisor.
pub const MOD: Cell = 4;
/// (a b -- a&&b) logical AND over "non-zero is true", pushes 0 or 1.
pub const AND: Cell = 5;
/// (a b -- a||b) logical OR, pushes 0 or 1.
pub const OR: Cell = 6;
/// (a -- !a) logical NOT, pushes 0 or 1.
pub const NOT: Cell = 7;

/// (a b -- b a) exchange the top two values.
pub const SWAP: Cell = 8;
/// (a -- a a) duplicate the top value.
pub const DUP: Cell = 9;
/// (a -- ) discard the top value.
pub const DROP: Cell = 10;

/// (n -- n or ) restart the current line while the top is non-zero;
/// pop it and fall through once it reaches zero.
pub const LOOP: Cell = 11;
/// (cond opcode -- ) dispatch opcode if cond is non-zero.
pub const IF: Cell = 12;
/// (cond yes no -- ) dispatch yes if cond is non-zero, else no.
pub const IF_ELSE: Cell = 13;

/// (v -- ) write the character with code v to stdout for 0 <= v < 255.
pub const EMIT: Cell = 14;
/// ( -- c) read one character from stdin.
pub const READ: Cell = 15;

/// (v -- ) terminate the whole process with status v. Never returns.
pub const EXIT: Cell = 16;

/// First line number available to user programs. Every opcode below
/// this is an intrinsic slot; source lines below it are reserved.
pub const FIRST_USER: Cell = 21;

/// The magic call value. Pushing it through [`Runtime::push_data`]
/// pops an opcode and dispatches it instead of landing on the stack.
///
/// [`Runtime::push_data`]: crate::Runtime::push_data
pub const CALL: Cell = 42;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsics_fit_below_first_user() {
        for op in [
            PLUS, MINUS, MULT, DIV, MOD, AND, OR, NOT, SWAP, DUP, DROP, LOOP, IF, IF_ELSE, EMIT,
            READ, EXIT,
        ] {
            assert!((0..FIRST_USER).contains(&op));
        }
    }

    #[test]
    fn call_is_outside_the_intrinsic_range() {
        assert!(FIRST_USER <= CALL);
        assert_ne!(FIRST_USER, CALL);
    }

    #[test]
    fn opcodes_are_distinct() {
        let ops = [
            PLUS, MINUS, MULT, DIV, MOD, AND, OR, NOT, SWAP, DUP, DROP, LOOP, IF, IF_ELSE, EMIT,
            READ, EXIT,
        ];
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
