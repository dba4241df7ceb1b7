//! Multi-bit arithmetic using ripple chains.
//!
//! Provides addition, subtraction and comparison of [`BitSequence`]s of
//! any length. Operands are aligned at their least-significant bit and the
//! shorter one reads as zero past its top digit. A single state bit
//! (carry or borrow) is threaded from the lowest position to the highest.

use std::fmt;
use serde::{Serialize, Deserialize};
use tracing::trace;
use crate::binary::{gates, Bit, BitSequence};

/// Relation of the left operand to the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Left is strictly less than right.
    Less,
    /// Left is greater than or equal to right.
    NotLess,
}

/// Sign attached to a subtraction magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Text placed in front of a magnitude: empty or `"-"`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "-",
        }
    }
}

/// Which single-bit circuit a ripple pass chains together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    /// Full adder, threading a carry.
    Carry,
    /// Full subtractor, threading a borrow.
    Borrow,
}

impl Chain {
    /// Evaluate one cell of the chain: `(output, state_out)`.
    #[inline]
    pub const fn cell(self, x: Bit, y: Bit, state: Bit) -> (Bit, Bit) {
        match self {
            Chain::Carry => gates::full_add(x, y, state),
            Chain::Borrow => gates::full_subtract(x, y, state),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Carry => write!(f, "carry"),
            Chain::Borrow => write!(f, "borrow"),
        }
    }
}

/// One position of a ripple pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RippleStep {
    /// Bit position, 0 = least significant.
    pub position: usize,
    /// Left operand bit (zero when padded).
    pub x: Bit,
    /// Right operand bit (zero when padded).
    pub y: Bit,
    /// Carry or borrow coming in from the position below.
    pub state_in: Bit,
    /// Sum or difference bit written at this position.
    pub output: Bit,
    /// Carry or borrow handed to the position above.
    pub state_out: Bit,
}

/// Run one ripple pass over `max(len a, len b)` positions.
///
/// Returns the output bits least significant first, plus the final state.
fn ripple<F>(a: &BitSequence, b: &BitSequence, chain: Chain, mut observe: F) -> (Vec<Bit>, Bit)
where
    F: FnMut(RippleStep),
{
    let width = a.len().max(b.len());
    trace!(width, %chain, "ripple pass");

    let mut output = Vec::with_capacity(width + 1);
    let mut state = Bit::Zero;

    for position in 0..width {
        let x = a.bit_from_lsb(position);
        let y = b.bit_from_lsb(position);
        let (bit, next) = chain.cell(x, y, state);
        observe(RippleStep { position, x, y, state_in: state, output: bit, state_out: next });
        output.push(bit);
        state = next;
    }

    (output, state)
}

/// Add two sequences.
///
/// The result is `max(len a, len b)` digits wide, or one wider when the
/// final carry is set. It is not normalized.
pub fn add(a: &BitSequence, b: &BitSequence) -> BitSequence {
    add_traced(a, b).0
}

/// Add two sequences, also returning every step of the carry chain.
pub fn add_traced(a: &BitSequence, b: &BitSequence) -> (BitSequence, Vec<RippleStep>) {
    let mut steps = Vec::with_capacity(a.len().max(b.len()));
    let (mut bits, carry) = ripple(a, b, Chain::Carry, |step| steps.push(step));

    if carry.is_set() {
        bits.push(Bit::One);
    }

    (BitSequence::from_lsb_first(bits), steps)
}

/// Compare two sequences.
///
/// Operands of different length are ordered by length alone, so both must
/// be free of leading zeros for the result to reflect their values. Equal
/// lengths are compared with the [`gates::less_so_far`] cell folded from the
/// least-significant pair upward, so the highest differing pair decides.
pub fn compare(a: &BitSequence, b: &BitSequence) -> Comparison {
    if a.len() != b.len() {
        return if a.len() < b.len() { Comparison::Less } else { Comparison::NotLess };
    }

    let less = (0..a.len()).fold(Bit::Zero, |less, position| {
        gates::less_so_far(a.bit_from_lsb(position), b.bit_from_lsb(position), less)
    });

    if less.is_set() { Comparison::Less } else { Comparison::NotLess }
}

/// Subtract `b` from `a`, returning `(magnitude, sign)`.
///
/// When `a < b` the operands are swapped and the sign is negative. The
/// magnitude is normalized.
pub fn subtract(a: &BitSequence, b: &BitSequence) -> (BitSequence, Sign) {
    let (magnitude, sign, _) = subtract_traced(a, b);
    (magnitude, sign)
}

/// Subtract `b` from `a`, also returning every step of the borrow chain.
///
/// The steps describe the pass actually run, i.e. `b − a` when the
/// operands were swapped.
pub fn subtract_traced(
    a: &BitSequence,
    b: &BitSequence,
) -> (BitSequence, Sign, Vec<RippleStep>) {
    let (minuend, subtrahend, sign) = match compare(a, b) {
        Comparison::NotLess => (a, b, Sign::Positive),
        Comparison::Less => (b, a, Sign::Negative),
    };

    let mut steps = Vec::with_capacity(minuend.len().max(subtrahend.len()));
    let (bits, borrow) = ripple(minuend, subtrahend, Chain::Borrow, |step| steps.push(step));

    // Only reachable when the operands broke the no-leading-zero contract
    debug_assert!(
        !borrow.is_set() || !(a.is_normalized() && b.is_normalized()),
        "borrow out of the top position: {} - {}", minuend, subtrahend
    );

    (BitSequence::from_lsb_first(bits).normalize(), sign, steps)
}
