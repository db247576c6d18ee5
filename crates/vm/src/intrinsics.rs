//! The fixed intrinsic table and its operations.
//!
//! Each intrinsic receives the Runtime by mutable reference and checks
//! its own operand count before reading. Binary operations pop their
//! operands most-recent-first, so `b a op` computes over `b` and `a`
//! in conventional postfix order.

use std::io::{self, ErrorKind, Read, Write};
use std::process;

use crate::error::RuntimeError;
use crate::opcode;
use crate::runtime::Runtime;
use crate::Cell;

pub(crate) type Intrinsic = fn(&mut Runtime) -> Result<(), RuntimeError>;

/// Lookup table for opcodes below `FIRST_USER`. Keep in sync with the
/// constants in [`opcode`]. Unused slots alias `exit` as a safety
/// default.
pub(crate) const TABLE: [Intrinsic; opcode::FIRST_USER as usize] = [
    plus, minus, mult, div, modulo, logic_and, logic_or, logic_not, swap, dup, drop_top,
    loop_line, dispatch_if, dispatch_if_else, emit, read, exit, exit, exit, exit, exit,
];

fn binary(forth: &mut Runtime, f: fn(Cell, Cell) -> Cell) -> Result<(), RuntimeError> {
    let a = forth.pop_data()?;
    let b = forth.pop_data()?;
    forth.push_data_no_exec(f(a, b));
    Ok(())
}

fn plus(forth: &mut Runtime) -> Result<(), RuntimeError> {
    binary(forth, |a, b| a.wrapping_add(b))
}

fn minus(forth: &mut Runtime) -> Result<(), RuntimeError> {
    binary(forth, |a, b| b.wrapping_sub(a))
}

fn mult(forth: &mut Runtime) -> Result<(), RuntimeError> {
    binary(forth, |a, b| a.wrapping_mul(b))
}

fn div(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let a = forth.pop_data()?;
    let b = forth.pop_data()?;
    if a == 0 {
        return Err(forth.division_by_zero());
    }
    forth.push_data_no_exec(b.wrapping_div(a));
    Ok(())
}

fn modulo(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let a = forth.pop_data()?;
    let b = forth.pop_data()?;
    if a == 0 {
        return Err(forth.division_by_zero());
    }
    forth.push_data_no_exec(b.wrapping_rem(a));
    Ok(())
}

fn logic_and(forth: &mut Runtime) -> Result<(), RuntimeError> {
    binary(forth, |a, b| Cell::from(a != 0 && b != 0))
}

fn logic_or(forth: &mut Runtime) -> Result<(), RuntimeError> {
    binary(forth, |a, b| Cell::from(a != 0 || b != 0))
}

fn logic_not(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let a = forth.pop_data()?;
    forth.push_data_no_exec(Cell::from(a == 0));
    Ok(())
}

fn swap(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let len = forth.data.len();
    if len < 2 {
        return Err(forth.underflow("swap"));
    }
    forth.data.swap(len - 2, len - 1);
    Ok(())
}

fn dup(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let top = match forth.data.last() {
        Some(&top) => top,
        None => return Err(forth.underflow("dup")),
    };
    forth.push_data_no_exec(top);
    Ok(())
}

fn drop_top(forth: &mut Runtime) -> Result<(), RuntimeError> {
    forth.pop_data()?;
    Ok(())
}

/// While the top of the stack is non-zero, restart the current line;
/// once it reaches zero, pop it and fall through.
fn loop_line(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let top = match forth.data.last() {
        Some(&top) => top,
        None => return Err(forth.underflow("loop")),
    };
    if top == 0 {
        forth.pop_data()?;
    } else {
        forth.ip_col = 0;
    }
    Ok(())
}

fn dispatch_if(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let op = forth.pop_data()?;
    let cond = forth.pop_data()?;
    if cond != 0 {
        forth.do_opcode(op)
    } else {
        Ok(())
    }
}

fn dispatch_if_else(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let op_no = forth.pop_data()?;
    let op_yes = forth.pop_data()?;
    let cond = forth.pop_data()?;
    forth.do_opcode(if cond != 0 { op_yes } else { op_no })
}

fn emit(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let v = forth.pop_data()?;
    if (0..255).contains(&v) {
        // Buffered; `exit` flushes before ending the process.
        let _ = io::stdout().write_all(&[v as u8]);
    }
    Ok(())
}

/// Read one character from stdin, skipping ASCII whitespace. The code
/// is pushed without the magic-call check so a literal `*` (42) read
/// from input cannot trigger a call. End of input pushes -1.
fn read(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let mut stdin = io::stdin();
    let mut byte = [0u8; 1];
    loop {
        match stdin.read(&mut byte) {
            Ok(0) => {
                forth.push_data_no_exec(-1);
                return Ok(());
            }
            Ok(_) if byte[0].is_ascii_whitespace() => continue,
            Ok(_) => {
                forth.push_data_no_exec(Cell::from(byte[0]));
                return Ok(());
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => {
                forth.push_data_no_exec(-1);
                return Ok(());
            }
        }
    }
}

/// Terminate the whole process with the popped status. Never returns.
fn exit(forth: &mut Runtime) -> Result<(), RuntimeError> {
    let status = forth.pop_data()?;
    let _ = io::stdout().flush();
    process::exit(status);
}
