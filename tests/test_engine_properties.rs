//! Engine property tests
//!
//! Covers the sequence laws both variants must satisfy: known prefixes,
//! length, variant equivalence over the standard-safe range, and exact
//! decimal round-tripping of arbitrary-precision values.

use fibworker::engine::{self, guard::Precision};
use fibworker::STANDARD_PRECISION_LIMIT;
use num_bigint::BigUint;
use proptest::prelude::*;

#[test]
fn test_zero_length_is_empty() {
    assert!(engine::standard(0).is_empty());
    assert!(engine::arbitrary(0).is_empty());
}

#[test]
fn test_known_prefixes() {
    assert_eq!(engine::standard(1), vec![0]);
    assert_eq!(engine::standard(2), vec![0, 1]);
    assert_eq!(engine::standard(5), vec![0, 1, 1, 2, 3]);
    assert_eq!(engine::standard(10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn test_hundred_element_sequence() {
    let sequence = engine::arbitrary(100);
    assert_eq!(sequence.len(), 100);
    assert_eq!(
        sequence[99],
        BigUint::parse_bytes(b"218922995834555169026", 10).unwrap()
    );
}

#[test]
fn test_variants_identical_across_safe_range() {
    for n in 0..=STANDARD_PRECISION_LIMIT {
        let fixed = engine::standard(n);
        let exact = engine::arbitrary(n);
        assert_eq!(fixed.len(), exact.len());
        for (a, b) in fixed.iter().zip(exact.iter()) {
            assert_eq!(BigUint::from(*a), *b, "divergence at n={n}");
        }
    }
}

#[test]
fn test_generate_length_invariant() {
    for n in [0u64, 1, 2, 50, 98] {
        assert_eq!(engine::generate(n, Precision::Standard).len(), n as usize);
    }
    for n in [0u64, 99, 250] {
        assert_eq!(engine::generate(n, Precision::Arbitrary).len(), n as usize);
    }
}

proptest! {
    #[test]
    fn prop_arbitrary_length_matches_request(n in 0u64..400) {
        prop_assert_eq!(engine::arbitrary(n).len(), n as usize);
    }

    #[test]
    fn prop_recurrence_holds(n in 3u64..300) {
        let sequence = engine::arbitrary(n);
        for k in 2..sequence.len() {
            prop_assert_eq!(&sequence[k], &(&sequence[k - 1] + &sequence[k - 2]));
        }
    }

    #[test]
    fn prop_variants_agree_in_safe_range(n in 0u64..=98) {
        let fixed = engine::standard(n);
        let exact = engine::arbitrary(n);
        prop_assert_eq!(fixed.len(), exact.len());
        for (a, b) in fixed.iter().zip(exact.iter()) {
            prop_assert_eq!(&BigUint::from(*a), b);
        }
    }

    #[test]
    fn prop_decimal_text_round_trips(n in 1u64..250) {
        // Decimal strings on the wire must parse back to the exact values
        // computed internally.
        let sequence = engine::arbitrary(n);
        let last = sequence.last().unwrap();
        let text = last.to_string();
        let parsed = BigUint::parse_bytes(text.as_bytes(), 10).unwrap();
        prop_assert_eq!(&parsed, last);
    }
}
