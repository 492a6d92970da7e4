//! Dual-precision Fibonacci engine
//!
//! Pure computation, no I/O. Two interchangeable strategies share one
//! contract: `generate` returns the zero-indexed sequence `F(0)=0, F(1)=1,
//! F(k)=F(k-1)+F(k-2)` of exactly `n` elements, computed by the iterative
//! linear recurrence in `O(n)` additions and `O(n)` space.
//!
//! The standard variant holds values in `u128`, which comfortably covers
//! every index the precision guard admits (F(98) is ~1.35e20; u128 overflows
//! only past index 186). The arbitrary-precision variant holds
//! [`num_bigint::BigUint`] values and is exact for any magnitude.

pub mod guard;

use guard::Precision;
use num_bigint::BigUint;

/// A computed sequence in whichever representation the guard selected.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    /// Fixed-width values, safe within the guard's ceiling
    Standard(Vec<u128>),
    /// Unbounded-magnitude values, exact for any index
    Arbitrary(Vec<BigUint>),
}

impl Sequence {
    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        match self {
            Sequence::Standard(values) => values.len(),
            Sequence::Arbitrary(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate the first `n` Fibonacci numbers under the selected precision.
pub fn generate(n: u64, precision: Precision) -> Sequence {
    match precision {
        Precision::Standard => Sequence::Standard(standard(n)),
        Precision::Arbitrary => Sequence::Arbitrary(arbitrary(n)),
    }
}

/// Standard-precision strategy: fixed-width values.
///
/// Callers are expected to gate `n` through [`guard::select`] first; this
/// function itself is total for any `n` small enough to allocate, and will
/// overflow in debug builds past index 186.
pub fn standard(n: u64) -> Vec<u128> {
    let n = n as usize;
    if n == 0 {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(n);
    sequence.push(0u128);
    if n == 1 {
        return sequence;
    }
    sequence.push(1u128);

    for i in 2..n {
        let next = sequence[i - 1] + sequence[i - 2];
        sequence.push(next);
    }

    sequence
}

/// Arbitrary-precision strategy: exact addition regardless of digit count.
pub fn arbitrary(n: u64) -> Vec<BigUint> {
    let n = n as usize;
    if n == 0 {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(n);
    sequence.push(BigUint::from(0u8));
    if n == 1 {
        return sequence;
    }
    sequence.push(BigUint::from(1u8));

    for i in 2..n {
        let next = &sequence[i - 1] + &sequence[i - 2];
        sequence.push(next);
    }

    sequence
}
