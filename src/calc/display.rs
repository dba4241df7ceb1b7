//! Column layout for a finished calculation.
//!
//! A calculation prints as a right-aligned sum on paper:
//!
//! ```text
//!    101
//! +   11
//! ------
//!   1000
//! ```

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::binary::{self, BitSequence, Sign};
use crate::calc::Operation;

/// Result of evaluating an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Unnormalized sum.
    Sum { sum: BitSequence },
    /// Normalized magnitude and its sign.
    Difference { magnitude: BitSequence, sign: Sign },
}

/// Two operands, the operation applied to them and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub x: BitSequence,
    pub y: BitSequence,
    pub op: Operation,
    pub outcome: Outcome,
}

impl Calculation {
    /// `x + y`
    pub fn add(x: BitSequence, y: BitSequence) -> Self {
        let sum = binary::add(&x, &y);
        Self { x, y, op: Operation::Add, outcome: Outcome::Sum { sum } }
    }

    /// `x - y`
    pub fn subtract(x: BitSequence, y: BitSequence) -> Self {
        let (magnitude, sign) = binary::subtract(&x, &y);
        Self {
            x,
            y,
            op: Operation::Subtract,
            outcome: Outcome::Difference { magnitude, sign },
        }
    }

    /// Evaluate `op`. Returns `None` for [`Operation::Quit`].
    pub fn evaluate(op: Operation, x: BitSequence, y: BitSequence) -> Option<Self> {
        match op {
            Operation::Add => Some(Self::add(x, y)),
            Operation::Subtract => Some(Self::subtract(x, y)),
            Operation::Quit => None,
        }
    }

    /// The result as printed on the bottom line, `-` prefix included.
    pub fn result_text(&self) -> String {
        match &self.outcome {
            Outcome::Sum { sum } => sum.to_string(),
            Outcome::Difference { magnitude, sign } => format!("{}{}", sign.prefix(), magnitude),
        }
    }

    /// Column width: the wider operand plus two.
    pub fn width(&self) -> usize {
        self.x.len().max(self.y.len()) + 2
    }

    /// Render the four-line layout, without a trailing newline.
    pub fn render(&self) -> String {
        let width = self.width();
        format!(
            "{x:>w$}\n{op}{y:>w1$}\n{rule}\n{result:>w$}",
            x = self.x,
            op = self.op,
            y = self.y,
            rule = "-".repeat(width),
            result = self.result_text(),
            w = width,
            w1 = width - 1,
        )
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
