//! # Ripple Calculator
//!
//! Arbitrary-length binary addition and subtraction computed one bit at a
//! time by logic-gate circuits.
//!
//! Every result digit comes from a full adder or full subtractor built out
//! of NOT/AND/OR/XOR, chained into a ripple-carry (or ripple-borrow) pass.
//! This is a teaching tool for how those circuits work, not a fast bignum
//! library.

pub mod binary;
pub mod calc;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use binary::{add, compare, subtract, Bit, BitSequence, Comparison, Sign};
pub use calc::{Calculation, Operation, RippleTrace, Session, ValidationError};

#[cfg(feature = "tui")]
pub use tui::run_stepper;
