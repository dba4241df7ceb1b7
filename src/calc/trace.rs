//! Position-by-position record of one calculation's ripple pass.

use std::fmt::Write as _;
use serde::{Serialize, Deserialize};
use crate::binary::{self, BitSequence, Chain, RippleStep, Sign};
use crate::calc::{Calculation, Operation, Outcome};

/// A calculation together with the ripple pass that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RippleTrace {
    /// The calculation as the user entered it.
    pub calculation: Calculation,
    /// Top operand of the pass (the larger one after a subtraction swap).
    pub upper: BitSequence,
    /// Bottom operand of the pass.
    pub lower: BitSequence,
    pub chain: Chain,
    /// One entry per position, least significant first.
    pub steps: Vec<RippleStep>,
}

impl RippleTrace {
    /// Run `op` on `x` and `y`, recording every ripple step.
    /// Returns `None` for [`Operation::Quit`].
    pub fn run(op: Operation, x: BitSequence, y: BitSequence) -> Option<Self> {
        match op {
            Operation::Add => {
                let (sum, steps) = binary::add_traced(&x, &y);
                Some(Self {
                    upper: x.clone(),
                    lower: y.clone(),
                    chain: Chain::Carry,
                    steps,
                    calculation: Calculation { x, y, op, outcome: Outcome::Sum { sum } },
                })
            }
            Operation::Subtract => {
                let (magnitude, sign, steps) = binary::subtract_traced(&x, &y);
                let (upper, lower) = match sign {
                    Sign::Positive => (x.clone(), y.clone()),
                    Sign::Negative => (y.clone(), x.clone()),
                };
                Some(Self {
                    upper,
                    lower,
                    chain: Chain::Borrow,
                    steps,
                    calculation: Calculation {
                        x,
                        y,
                        op,
                        outcome: Outcome::Difference { magnitude, sign },
                    },
                })
            }
            Operation::Quit => None,
        }
    }

    /// Width of the pass in positions.
    pub fn width(&self) -> usize {
        self.steps.len()
    }

    /// Bit written at `position` once the pass is complete.
    pub fn output_at(&self, position: usize) -> Option<binary::Bit> {
        self.steps.get(position).map(|s| s.output)
    }

    /// Column header letter for the state bit (`c` or `b`).
    pub fn state_label(&self) -> &'static str {
        match self.chain {
            Chain::Carry => "c",
            Chain::Borrow => "b",
        }
    }

    /// Plain-text table of the pass followed by the calculation layout.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let s = self.state_label();
        let _ = writeln!(
            out,
            "{} {} {}, {} chain",
            self.upper, self.calculation.op, self.lower, self.chain
        );
        let _ = writeln!(out, "pos  x y {}in  Z {}out", s, s);
        for step in &self.steps {
            let _ = writeln!(
                out,
                "{:>3}  {} {}  {}   {}  {}",
                step.position, step.x, step.y, step.state_in, step.output, step.state_out
            );
        }
        let _ = writeln!(out);
        out.push_str(&self.calculation.render());
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
