//! Interactive calculator session.
//!
//! Reads an operation and two operands per round, printing the calculation
//! layout after each one, until the user quits or input runs out.

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;
use crate::binary::BitSequence;
use crate::calc::{parse_operand, Calculation, Operation};

const OPERATION_PROMPT: &str = "Choose operation [+, -, q]: ";

/// A read-eval-print loop over any line source and sink.
pub struct Session<R, W> {
    input: R,
    output: W,
    /// Calculations printed so far.
    completed: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, completed: 0 }
    }

    /// Run until `q` or end of input. Returns the number of calculations
    /// performed.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        loop {
            let op = match self.read_operation()? {
                Some(Operation::Quit) | None => break,
                Some(op) => op,
            };

            let Some(x) = self.read_operand("X")? else { break };
            let Some(y) = self.read_operand("Y")? else { break };

            writeln!(self.output)?;
            if let Some(calc) = Calculation::evaluate(op, x, y) {
                debug!(
                    x = %calc.x,
                    y = %calc.y,
                    result = %calc.result_text(),
                    "calculated {}", op
                );
                write!(self.output, "{}\n\n", calc)?;
                self.completed += 1;
            }
        }

        self.output.flush()?;
        Ok(self.completed)
    }

    /// Consume the session, handing back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail validation like any other
        // stray character.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn read_operation(&mut self) -> Result<Option<Operation>, SessionError> {
        loop {
            let Some(line) = self.prompt(OPERATION_PROMPT)? else { return Ok(None) };
            match Operation::parse(&line) {
                Ok(op) => return Ok(Some(op)),
                Err(e) => {
                    debug!(error = %e, "rejected operation");
                    writeln!(self.output, "Invalid operation.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn read_operand(&mut self, label: &str) -> Result<Option<BitSequence>, SessionError> {
        loop {
            let Some(line) = self.prompt(&format!("{}: ", label))? else { return Ok(None) };
            match parse_operand(&line) {
                Ok(seq) => return Ok(Some(seq)),
                Err(e) => {
                    debug!(error = %e, operand = label, "rejected operand");
                    writeln!(self.output, "Not a binary number!")?;
                }
            }
        }
    }
}

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_bytes(script: &[u8]) -> (usize, String) {
        let mut session = Session::new(Cursor::new(script.to_vec()), Vec::new());
        let count = session.run().unwrap();
        (count, String::from_utf8(session.into_output()).unwrap())
    }

    fn run_script(script: &str) -> (usize, String) {
        run_bytes(script.as_bytes())
    }

    #[test]
    fn test_single_addition_then_quit() {
        let (count, out) = run_script("+\n101\n11\nq\n");
        assert_eq!(count, 1);
        assert_eq!(
            out,
            "Choose operation [+, -, q]: X: Y: \n  101\n+  11\n-----\n 1000\n\nChoose operation [+, -, q]: "
        );
    }

    #[test]
    fn test_invalid_operation_reprompts() {
        let (count, out) = run_script("*\nq\n");
        assert_eq!(count, 0);
        assert_eq!(
            out,
            "Choose operation [+, -, q]: Invalid operation.\n\nChoose operation [+, -, q]: "
        );
    }

    #[test]
    fn test_invalid_operands_reprompt() {
        let (count, out) = run_script("-\n12\n0011\nabc\n101\nquit\n");
        assert_eq!(count, 1);
        assert!(out.contains("X: Not a binary number!\nX: Y: Not a binary number!\nY: \n"));
        // Leading zeros are stripped before display
        assert!(out.contains("   11\n- 101\n-----\n  -10\n\n"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (count, out) = run_script("+\r\n1\r\n1\r\nq\r\n");
        assert_eq!(count, 1);
        assert!(out.contains("  1\n+ 1\n---\n 10\n\n"));
    }

    #[test]
    fn test_invalid_utf8_operand_reprompts() {
        let (count, out) = run_bytes(b"+\n\xff\xfe\n1\n1\nq\n");
        assert_eq!(count, 1);
        assert!(out.contains("X: Not a binary number!\nX: Y: \n"));
        assert!(out.contains("  1\n+ 1\n---\n 10\n\n"));
    }

    #[test]
    fn test_invalid_utf8_operation_reprompts() {
        let (count, out) = run_bytes(b"\xc3\n-\n10\n1\nq\n");
        assert_eq!(count, 1);
        assert!(out.starts_with("Choose operation [+, -, q]: Invalid operation.\n\n"));
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let (count, out) = run_script(" + \n 101 \n\t11\nq \n");
        assert_eq!(count, 1);
        assert!(out.contains("  101\n+  11\n-----\n 1000\n\n"));
        assert!(!out.contains("Invalid operation."));
        assert!(!out.contains("Not a binary number!"));
    }

    #[test]
    fn test_end_of_input_ends_cleanly() {
        assert_eq!(run_script("").0, 0);
        assert_eq!(run_script("+\n101\n").0, 0);
        assert_eq!(run_script("-\n1\n1\n").0, 1);
    }
}
