//! Single-bit arithmetic circuits.
//!
//! Each circuit takes two operand bits and one inbound state bit (carry,
//! borrow, or "less so far") and produces one output bit. They are built
//! only from the gates on [`Bit`], so each one is a direct transcription of
//! its boolean formula.

use crate::binary::Bit;

/// Full-adder sum: `x ⊕ y ⊕ c`.
#[inline]
pub const fn sum_bit(x: Bit, y: Bit, carry: Bit) -> Bit {
    x.xor(y).xor(carry)
}

/// Full-adder carry: `(x ∧ y) ∨ (c ∧ (x ⊕ y))`.
#[inline]
pub const fn carry_out(x: Bit, y: Bit, carry: Bit) -> Bit {
    x.and(y).or(carry.and(x.xor(y)))
}

/// Full-subtractor difference for `x − y − b`: `x ⊕ y ⊕ b`.
#[inline]
pub const fn diff_bit(x: Bit, y: Bit, borrow: Bit) -> Bit {
    x.xor(y).xor(borrow)
}

/// Full-subtractor borrow: `(¬x ∧ b) ∨ (¬x ∧ y) ∨ (y ∧ b)`.
#[inline]
pub const fn borrow_out(x: Bit, y: Bit, borrow: Bit) -> Bit {
    x.not().and(borrow).or(x.not().and(y)).or(y.and(borrow))
}

/// Magnitude comparator cell: `(y ∧ l) ∨ (¬x ∧ y) ∨ (¬x ∧ l)`.
///
/// `less` is the verdict for the bits already folded. The output is 1 when
/// `x < y` at this position, 0 when `x > y`, and `less` unchanged when the
/// two bits are equal. Folding from the least-significant pair upward
/// therefore leaves the verdict of the highest differing pair.
#[inline]
pub const fn less_so_far(x: Bit, y: Bit, less: Bit) -> Bit {
    y.and(less).or(x.not().and(y)).or(x.not().and(less))
}

/// Full adder: returns `(sum, carry_out)`.
#[inline]
pub const fn full_add(x: Bit, y: Bit, carry_in: Bit) -> (Bit, Bit) {
    (sum_bit(x, y, carry_in), carry_out(x, y, carry_in))
}

/// Full subtractor for `x − y − borrow_in`: returns `(difference, borrow_out)`.
#[inline]
pub const fn full_subtract(x: Bit, y: Bit, borrow_in: Bit) -> (Bit, Bit) {
    (diff_bit(x, y, borrow_in), borrow_out(x, y, borrow_in))
}
