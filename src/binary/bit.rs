//! Single binary digit (bit) and the primitive logic gates over it.
//!
//! A bit holds one of two values, 0 or 1, read as false and true. Every
//! higher-level circuit in this crate is composed from the four gates
//! defined here: [`Bit::not`], [`Bit::and`], [`Bit::or`] and [`Bit::xor`].

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single binary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Zero (false)
    Zero = 0,
    /// One (true)
    One = 1,
}

impl Bit {
    /// Both bit values in ascending order.
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Create a bit from a `bool` (true = 1).
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }

    /// Create a bit from a digit character.
    ///
    /// Returns `None` for anything other than `'0'` or `'1'`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Create a bit from an integer value.
    ///
    /// # Panics
    /// Panics if value is not 0 or 1.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Bit::Zero,
            1 => Bit::One,
            _ => panic!("Invalid bit value: {} (must be 0 or 1)", value),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Convert to the digit character `'0'` or `'1'`.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Returns true if this bit is one.
    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Bit::One)
    }

    /// NOT gate: 1 − x.
    #[inline]
    pub const fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    /// AND gate: 1 iff both inputs are 1.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Bit::One, Bit::One) => Bit::One,
            _ => Bit::Zero,
        }
    }

    /// OR gate: 0 iff both inputs are 0.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Bit::Zero, Bit::Zero) => Bit::Zero,
            _ => Bit::One,
        }
    }

    /// Exclusive OR, derived in conjunctive normal form:
    /// `(x ∨ y) ∧ (¬x ∨ ¬y)`.
    ///
    /// Kept as a composition of the three primitive gates rather than a
    /// native operator so the circuits built on top of it use only
    /// AND/OR/NOT. [`Bit::xor_native`] computes the same table directly.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        self.or(other).and(self.not().or(other.not()))
    }

    /// Exclusive OR as a direct inequality test.
    #[inline]
    pub const fn xor_native(self, other: Self) -> Self {
        Bit::from_bool(self.to_u8() != other.to_u8())
    }
}

impl Default for Bit {
    fn default() -> Self {
        Bit::Zero
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::ops::Not for Bit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bit::not(self)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const O: Bit = Bit::Zero;
    const I: Bit = Bit::One;

    #[test]
    fn test_not_involution() {
        for b in Bit::ALL {
            assert_eq!(b.not().not(), b, "not(not({:?})) should equal {:?}", b, b);
        }
        assert_eq!(O.not(), I);
        assert_eq!(I.not(), O);
    }

    #[test]
    fn test_and_table() {
        assert_eq!(O.and(O), O);
        assert_eq!(O.and(I), O);
        assert_eq!(I.and(O), O);
        assert_eq!(I.and(I), I);
    }

    #[test]
    fn test_or_table() {
        assert_eq!(O.or(O), O);
        assert_eq!(O.or(I), I);
        assert_eq!(I.or(O), I);
        assert_eq!(I.or(I), I);
    }

    #[test]
    fn test_xor_table() {
        assert_eq!(O.xor(O), O);
        assert_eq!(O.xor(I), I);
        assert_eq!(I.xor(O), I);
        assert_eq!(I.xor(I), O);
    }

    #[test]
    fn test_cnf_xor_matches_native() {
        for x in Bit::ALL {
            for y in Bit::ALL {
                assert_eq!(x.xor(y), x.xor_native(y), "xor({:?}, {:?})", x, y);
            }
        }
    }

    #[test]
    fn test_gates_match_bool_logic() {
        for x in Bit::ALL {
            for y in Bit::ALL {
                let (a, b) = (x.is_set(), y.is_set());
                assert_eq!(x.and(y).is_set(), a && b);
                assert_eq!(x.or(y).is_set(), a || b);
                assert_eq!(x.xor(y).is_set(), a ^ b);
            }
        }
    }

    #[test]
    fn test_char_roundtrip() {
        for b in Bit::ALL {
            assert_eq!(Bit::from_char(b.to_char()), Some(b));
        }
        assert_eq!(Bit::from_char('2'), None);
        assert_eq!(Bit::from_char(' '), None);
    }

    #[test]
    #[should_panic(expected = "Invalid bit value")]
    fn test_from_u8_rejects_out_of_domain() {
        let _ = Bit::from_u8(2);
    }
}
