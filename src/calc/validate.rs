//! Validation of calculator input.
//!
//! Turns raw input lines into an [`Operation`] or a [`BitSequence`] operand,
//! or a [`ValidationError`] describing why the line was rejected.

use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::BitSequence;

/// One or more binary digits and nothing else.
static BINARY_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[01]+$").expect("invalid regex"));

/// Operation chosen at the calculator prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `q` or `quit`
    Quit,
}

impl Operation {
    /// Parse an operation token. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "q" | "quit" => Ok(Operation::Quit),
            other => Err(ValidationError::InvalidOperation(other.to_string())),
        }
    }

    /// The operator symbol shown in the calculation layout.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Quit => "q",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check that `input` is a binary number (`[01]+`).
pub fn is_binary_number(input: &str) -> bool {
    BINARY_NUMBER.is_match(input)
}

/// Strip leading zeros from a digit string, keeping the last digit.
pub fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        stripped
    }
}

/// Validate an operand line and convert it to a normalized sequence.
pub fn parse_operand(input: &str) -> Result<BitSequence, ValidationError> {
    let trimmed = input.trim();
    if !is_binary_number(trimmed) {
        return Err(ValidationError::NotABinaryNumber(trimmed.to_string()));
    }

    BitSequence::parse(strip_leading_zeros(trimmed))
        .map_err(|_| ValidationError::NotABinaryNumber(trimmed.to_string()))
}

/// Reasons a line of calculator input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid operation '{0}' (expected +, - or q)")]
    InvalidOperation(String),

    #[error("'{0}' is not a binary number")]
    NotABinaryNumber(String),
}
