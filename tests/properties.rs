//! Property tests for the ripple engine against native integer arithmetic.

use proptest::prelude::*;
use ripple::binary::{add, compare, subtract, Bit, BitSequence, Comparison, Sign};

/// Any digit string, leading zeros allowed.
fn raw_sequence() -> impl Strategy<Value = BitSequence> {
    proptest::collection::vec(any::<bool>(), 1..80).prop_map(|bits| {
        BitSequence::from_bits(bits.into_iter().map(Bit::from_bool).collect())
            .expect("strategy never yields an empty vector")
    })
}

/// Digit strings without leading zeros.
fn normalized_sequence() -> impl Strategy<Value = BitSequence> {
    raw_sequence().prop_map(|seq| seq.normalize())
}

proptest! {
    #[test]
    fn add_is_commutative(a in raw_sequence(), b in raw_sequence()) {
        prop_assert_eq!(add(&a, &b), add(&b, &a));
    }

    #[test]
    fn add_matches_native(a in any::<u32>(), b in any::<u32>()) {
        let sum = add(&BitSequence::from_u64(a as u64), &BitSequence::from_u64(b as u64));
        prop_assert_eq!(sum.to_u64(), Some(a as u64 + b as u64));
    }

    #[test]
    fn add_width_is_max_or_one_more(a in raw_sequence(), b in raw_sequence()) {
        let width = a.len().max(b.len());
        let sum = add(&a, &b);
        prop_assert!(sum.len() == width || sum.len() == width + 1);
        if sum.len() == width + 1 {
            prop_assert_eq!(sum.bits()[0], Bit::One);
        }
    }

    #[test]
    fn subtract_matches_native(a in any::<u32>(), b in any::<u32>()) {
        let (x, y) = (BitSequence::from_u64(a as u64), BitSequence::from_u64(b as u64));
        let (magnitude, sign) = subtract(&x, &y);
        let expected_sign = if a < b { Sign::Negative } else { Sign::Positive };
        prop_assert_eq!(sign, expected_sign);
        prop_assert_eq!(magnitude.to_u64(), Some((a as i64 - b as i64).unsigned_abs()));
        prop_assert!(magnitude.is_normalized());
    }

    #[test]
    fn subtract_then_add_round_trips(a in normalized_sequence(), b in normalized_sequence()) {
        let (big, small) = match compare(&a, &b) {
            Comparison::NotLess => (a, b),
            Comparison::Less => (b, a),
        };
        let (diff, sign) = subtract(&big, &small);
        prop_assert_eq!(sign, Sign::Positive);
        prop_assert_eq!(add(&small, &diff).normalize(), big);
    }

    #[test]
    fn subtract_self_is_zero(a in normalized_sequence()) {
        prop_assert_eq!(subtract(&a, &a), (BitSequence::zero(), Sign::Positive));
    }

    #[test]
    fn compare_matches_native(a in any::<u64>(), b in any::<u64>()) {
        let expected = if a < b { Comparison::Less } else { Comparison::NotLess };
        prop_assert_eq!(compare(&BitSequence::from_u64(a), &BitSequence::from_u64(b)), expected);
    }

    #[test]
    fn compare_equal_width(bits in proptest::collection::vec(any::<(bool, bool)>(), 1..64)) {
        let a: Vec<Bit> = bits.iter().map(|&(x, _)| Bit::from_bool(x)).collect();
        let b: Vec<Bit> = bits.iter().map(|&(_, y)| Bit::from_bool(y)).collect();
        let to_u64 = |v: &[Bit]| v.iter().fold(0u64, |acc, bit| acc * 2 + bit.to_u8() as u64);
        let expected = if to_u64(&a) < to_u64(&b) { Comparison::Less } else { Comparison::NotLess };

        let a = BitSequence::from_bits(a).unwrap();
        let b = BitSequence::from_bits(b).unwrap();
        prop_assert_eq!(compare(&a, &b), expected);
    }
}

#[test]
fn concrete_cases() {
    let seq = |s: &str| BitSequence::parse(s).unwrap();

    assert_eq!(add(&seq("101"), &seq("11")), seq("1000"));
    assert_eq!(add(&seq("1"), &seq("1")), seq("10"));
    assert_eq!(subtract(&seq("101"), &seq("11")), (seq("10"), Sign::Positive));
    assert_eq!(subtract(&seq("11"), &seq("101")), (seq("10"), Sign::Negative));
    assert_eq!(compare(&seq("10"), &seq("100")), Comparison::Less);
}
