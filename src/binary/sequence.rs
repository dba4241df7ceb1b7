//! Arbitrary-length binary numbers.
//!
//! A [`BitSequence`] is an unsigned integer written as a non-empty run of
//! bits, most significant first. It carries no implicit sign and no fixed
//! width; leading zeros are allowed and preserved until [`BitSequence::normalize`]
//! strips them.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::Bit;

/// A non-empty sequence of bits, most significant bit first.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitSequence {
    /// Bits stored from most significant (index 0) to least significant
    bits: Vec<Bit>,
}

impl BitSequence {
    /// The single-digit sequence `0`.
    pub fn zero() -> Self {
        Self { bits: vec![Bit::Zero] }
    }

    /// The single-digit sequence `1`.
    pub fn one() -> Self {
        Self { bits: vec![Bit::One] }
    }

    /// Create a sequence from bits (most significant first).
    pub fn from_bits(bits: Vec<Bit>) -> Result<Self, ParseError> {
        if bits.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { bits })
    }

    /// Build from bits collected least significant first, as a ripple pass
    /// produces them.
    ///
    /// The caller guarantees at least one bit.
    pub(crate) fn from_lsb_first(mut bits: Vec<Bit>) -> Self {
        debug_assert!(!bits.is_empty(), "ripple pass produced no bits");
        bits.reverse();
        Self { bits }
    }

    /// Parse a digit string such as `"10110"`.
    ///
    /// Surrounding whitespace is ignored. Leading zeros are kept.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let bits = s
            .chars()
            .enumerate()
            .map(|(index, ch)| Bit::from_char(ch).ok_or(ParseError::InvalidChar { ch, index }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bits })
    }

    /// Create from a native integer, without leading zeros.
    ///
    /// Only used at the edges (tests, demos); the arithmetic never goes
    /// through native integers.
    pub fn from_u64(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut bits = Vec::new();
        while value > 0 {
            bits.push(Bit::from_bool(value & 1 == 1));
            value >>= 1;
        }
        Self::from_lsb_first(bits)
    }

    /// Convert to a native integer, or `None` if it does not fit in 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        self.bits.iter().try_fold(0u64, |acc, bit| {
            acc.checked_mul(2)?.checked_add(bit.to_u8() as u64)
        })
    }

    /// The bits, most significant first.
    #[inline]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Number of digits, leading zeros included.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; a sequence holds at least one bit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the bit at `position` counted from the least significant end
    /// (0 = LSB). Positions past the most significant digit read as zero,
    /// which is how a shorter operand is padded in a ripple pass.
    #[inline]
    pub fn bit_from_lsb(&self, position: usize) -> Bit {
        if position < self.bits.len() {
            self.bits[self.bits.len() - 1 - position]
        } else {
            Bit::Zero
        }
    }

    /// Check if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| !b.is_set())
    }

    /// Check if the sequence has no redundant leading zero.
    pub fn is_normalized(&self) -> bool {
        self.bits.len() == 1 || self.bits[0].is_set()
    }

    /// Strip leading zeros, keeping at least one digit.
    pub fn normalize(&self) -> Self {
        let first_one = self
            .bits
            .iter()
            .position(|b| b.is_set())
            .unwrap_or(self.bits.len() - 1);
        Self { bits: self.bits[first_one..].to_vec() }
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence(0b{})", self)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.bits.iter().map(|b| b.to_char()).collect();
        // pad() so that width/alignment flags like {:>8} apply
        f.pad(&digits)
    }
}

impl FromStr for BitSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BitSequence {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<BitSequence> for String {
    fn from(seq: BitSequence) -> Self {
        seq.to_string()
    }
}

impl From<Bit> for BitSequence {
    fn from(bit: Bit) -> Self {
        Self { bits: vec![bit] }
    }
}

/// Errors that can occur when building a bit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No digits were supplied.
    #[error("a binary number needs at least one digit")]
    Empty,
    /// A character other than `0` or `1` was encountered.
    #[error("invalid binary digit '{ch}' at position {index}")]
    InvalidChar { ch: char, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let seq = BitSequence::parse("10110").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "10110");
        assert_eq!(seq.to_u64(), Some(22));

        // Leading zeros survive parsing
        let padded = BitSequence::parse("  0011 ").unwrap();
        assert_eq!(padded.to_string(), "0011");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(BitSequence::parse(""), Err(ParseError::Empty));
        assert_eq!(BitSequence::parse("   "), Err(ParseError::Empty));
        assert_eq!(
            BitSequence::parse("10a1"),
            Err(ParseError::InvalidChar { ch: 'a', index: 2 })
        );
        assert_eq!(BitSequence::from_bits(vec![]), Err(ParseError::Empty));
    }

    #[test]
    fn test_bit_from_lsb_pads_with_zero() {
        let seq = BitSequence::parse("110").unwrap();
        assert_eq!(seq.bit_from_lsb(0), Bit::Zero);
        assert_eq!(seq.bit_from_lsb(1), Bit::One);
        assert_eq!(seq.bit_from_lsb(2), Bit::One);
        assert_eq!(seq.bit_from_lsb(3), Bit::Zero);
        assert_eq!(seq.bit_from_lsb(100), Bit::Zero);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(BitSequence::parse("00101").unwrap().normalize().to_string(), "101");
        assert_eq!(BitSequence::parse("0000").unwrap().normalize().to_string(), "0");
        assert_eq!(BitSequence::parse("0").unwrap().normalize().to_string(), "0");
        assert_eq!(BitSequence::parse("1").unwrap().normalize().to_string(), "1");

        assert!(BitSequence::parse("0").unwrap().is_normalized());
        assert!(BitSequence::parse("100").unwrap().is_normalized());
        assert!(!BitSequence::parse("010").unwrap().is_normalized());
    }

    #[test]
    fn test_u64_conversions() {
        for value in [0u64, 1, 2, 5, 255, 1 << 40, u64::MAX] {
            let seq = BitSequence::from_u64(value);
            assert!(seq.is_normalized());
            assert_eq!(seq.to_u64(), Some(value));
        }

        // 65 digits no longer fit
        let wide = BitSequence::parse(&format!("1{}", "0".repeat(64))).unwrap();
        assert_eq!(wide.to_u64(), None);
    }

    #[test]
    fn test_display_honours_alignment() {
        let seq = BitSequence::parse("101").unwrap();
        assert_eq!(format!("{:>6}", seq), "   101");
    }

    #[test]
    fn test_serde_as_digit_string() {
        let seq = BitSequence::parse("1001").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"1001\"");

        let back: BitSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);

        assert!(serde_json::from_str::<BitSequence>("\"12\"").is_err());
    }
}
