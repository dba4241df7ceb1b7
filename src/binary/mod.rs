//! Binary arithmetic built from logic gates.
//!
//! This module provides the core types and circuits:
//! - [`Bit`] - A single binary digit with the NOT/AND/OR/XOR gates
//! - [`gates`] - Single-bit adder, subtractor and comparator cells
//! - [`BitSequence`] - An arbitrary-length unsigned binary number
//! - [`ripple`] - Carry/borrow chains over whole sequences

mod bit;
mod sequence;
pub mod gates;
pub mod ripple;

pub use bit::Bit;
pub use sequence::{BitSequence, ParseError};
pub use ripple::{
    add, add_traced, compare, subtract, subtract_traced, Chain, Comparison, RippleStep, Sign,
};
