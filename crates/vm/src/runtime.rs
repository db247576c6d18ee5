//! VM state: the two stacks, program memory, and the instruction
//! pointer, plus the stepping and compilation surface drivers use.

use crate::error::RuntimeError;
use crate::intrinsics;
use crate::opcode;
use crate::Cell;

/// The Fortytwo virtual machine.
///
/// A fresh Runtime has empty stacks, empty program memory, and the
/// instruction pointer at `(FIRST_USER, 0)`. It is `Clone` so a loaded
/// program can be reused across independent runs.
#[derive(Debug, Clone)]
pub struct Runtime {
    /// Data stack: the program's working values.
    pub(crate) data: Vec<Cell>,
    /// Return stack: saved frames, pushed as line then column.
    pub(crate) ret: Vec<Cell>,
    /// Program memory, one instruction sequence per line number.
    pub(crate) program: Vec<Vec<Cell>>,
    pub(crate) ip_line: Cell,
    pub(crate) ip_col: Cell,
    /// File name used only in diagnostics.
    pub(crate) file: String,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            ret: Vec::new(),
            program: Vec::new(),
            ip_line: opcode::FIRST_USER,
            ip_col: 0,
            file: String::from("<input>"),
        }
    }

    /// Set the file name reported in runtime errors.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file = name.into();
    }

    pub fn file_name(&self) -> &str {
        &self.file
    }

    /// Push a value onto the data stack. Pushing the magic call value
    /// instead pops an opcode and dispatches it; this is the single
    /// call mechanism of the language.
    pub fn push_data(&mut self, value: Cell) -> Result<(), RuntimeError> {
        if value == opcode::CALL {
            let op = self.pop_data()?;
            self.do_opcode(op)
        } else {
            self.push_data_no_exec(value);
            Ok(())
        }
    }

    /// Push a value onto the data stack with no magic-call check.
    /// Used to seed input stacks and by intrinsics pushing raw results.
    pub fn push_data_no_exec(&mut self, value: Cell) {
        self.data.push(value);
    }

    /// Remove and return the top of the data stack.
    pub fn pop_data(&mut self) -> Result<Cell, RuntimeError> {
        match self.data.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow("pop")),
        }
    }

    pub fn push_return(&mut self, value: Cell) {
        self.ret.push(value);
    }

    /// Remove and return the top of the return stack.
    pub fn pop_return(&mut self) -> Result<Cell, RuntimeError> {
        match self.ret.pop() {
            Some(v) => Ok(v),
            None => Err(RuntimeError::ReturnUnderflow {
                file: self.file.clone(),
                line: self.ip_line,
            }),
        }
    }

    /// Dispatch an opcode: intrinsics below `FIRST_USER`, subroutine
    /// calls at or above it. Negative opcodes are a defined no-op
    /// (they arise only from hand-reset instruction pointers, never
    /// from well-formed programs).
    pub fn do_opcode(&mut self, op: Cell) -> Result<(), RuntimeError> {
        if op < 0 {
            return Ok(());
        }
        if op < opcode::FIRST_USER {
            intrinsics::TABLE[op as usize](self)
        } else {
            // Remember where we are, then jump to the called line.
            // Execution resumes here once that line runs off its end.
            self.push_return(self.ip_line);
            self.push_return(self.ip_col);
            self.ip_line = op;
            self.ip_col = 0;
            Ok(())
        }
    }

    /// Perform exactly one state transition:
    /// - instruction pointer past all compiled lines: wrap to the user
    ///   entry point `(FIRST_USER, 0)`
    /// - column within the current line: read the cell, advance, and
    ///   feed it through [`push_data`](Self::push_data)
    /// - column off the end of the line: pop the saved frame and
    ///   resume the caller (this is the only return mechanism)
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        let row = self.ip_line;
        if row < 0 || row as usize >= self.program.len() {
            self.ip_line = opcode::FIRST_USER;
            self.ip_col = 0;
            return Ok(());
        }
        let len = self.program[row as usize].len();
        if self.ip_col >= 0 && (self.ip_col as usize) < len {
            let value = self.program[row as usize][self.ip_col as usize];
            self.ip_col += 1;
            self.push_data(value)
        } else {
            self.ip_col = self.pop_return()?;
            self.ip_line = self.pop_return()?;
            Ok(())
        }
    }

    /// Append a value to program memory at `line`, growing the backing
    /// storage as needed. Reserved targets (below `FIRST_USER`,
    /// negative, or the call line itself) are silently ignored; that
    /// is the defined behavior for header lines, not an error.
    pub fn compile(&mut self, line: Cell, value: Cell) {
        if line < opcode::FIRST_USER || line == opcode::CALL {
            return;
        }
        let row = line as usize;
        if self.program.len() <= row {
            self.program.resize_with(row + 1, Vec::new);
        }
        self.program[row].push(value);
    }

    /// Move the instruction pointer to the start of a line.
    pub fn reset_ip(&mut self, line: Cell) {
        self.ip_line = line;
        self.ip_col = 0;
    }

    /// Whether the instruction pointer is exactly at `(line, col)`.
    pub fn ip_at(&self, line: Cell, col: Cell) -> bool {
        self.ip_line == line && self.ip_col == col
    }

    /// The full data stack, bottom to top.
    pub fn data_stack(&self) -> &[Cell] {
        &self.data
    }

    /// Current depth of the return stack, in cells.
    pub fn return_depth(&self) -> usize {
        self.ret.len()
    }

    /// The compiled instruction sequence of a line; empty for lines
    /// that were never compiled into.
    pub fn line_instructions(&self, line: Cell) -> &[Cell] {
        if line < 0 {
            return &[];
        }
        self.program
            .get(line as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of cells compiled into a line.
    pub fn instruction_count(&self, line: Cell) -> usize {
        self.line_instructions(line).len()
    }

    /// Total number of lines in program memory, including empty ones
    /// below the highest compiled line.
    pub fn line_count(&self) -> usize {
        self.program.len()
    }

    pub(crate) fn underflow(&self, context: &'static str) -> RuntimeError {
        RuntimeError::DataUnderflow {
            file: self.file.clone(),
            line: self.ip_line,
            context,
        }
    }

    pub(crate) fn division_by_zero(&self) -> RuntimeError {
        RuntimeError::DivisionByZero {
            file: self.file.clone(),
            line: self.ip_line,
        }
    }
}
