//! Precision guard
//!
//! Policy component deciding whether standard-precision encoding can
//! represent a request's result exactly. Standard mode is capped at index
//! [`STANDARD_PRECISION_LIMIT`]; arbitrary-precision mode accepts any `n`
//! without bound. The missing cap is deliberate: the worker documents the
//! gap instead of inventing an undisclosed limit, and the gateway logs a
//! warning above an advisory threshold.

use crate::error::{WorkerError, WorkerResult};

/// Largest sequence index whose value survives standard-precision encoding
/// exactly. Beyond it, fixed-width numeric output would silently lose
/// precision on the host side.
pub const STANDARD_PRECISION_LIMIT: u64 = 98;

/// Numeric precision mode selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Fixed-width values, exact only up to the guard's ceiling
    Standard,
    /// Unbounded-magnitude values, exact for any index
    Arbitrary,
}

/// Select the engine strategy for a validated request.
///
/// Rejects standard-mode requests whose sequence would extend past the last
/// exactly-representable index.
pub fn select(n: u64, arbitrary_precision: bool) -> WorkerResult<Precision> {
    if arbitrary_precision {
        return Ok(Precision::Arbitrary);
    }

    if n > STANDARD_PRECISION_LIMIT {
        return Err(WorkerError::PrecisionOverflow {
            limit: STANDARD_PRECISION_LIMIT,
        });
    }

    Ok(Precision::Standard)
}
