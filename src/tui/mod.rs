//! TUI ripple stepper.
//!
//! Walks through a ripple pass one bit position at a time:
//! - Operands and partial result aligned in columns
//! - Carry/borrow row showing the state entering each position
//! - Step/run/reset controls
//! - Step log with every cell evaluated so far

mod app;
mod ui;

pub use app::{StepperApp, run_stepper};
