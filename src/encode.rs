//! Response encoding
//!
//! Builds the success body from a computed sequence: the values, `count`,
//! the elapsed engine time, and the precision flag. Arbitrary-precision
//! values are always emitted as exact base-10 text; emitting them as native
//! numbers would reintroduce the precision loss the mode exists to avoid.
//! Standard values are emitted as native JSON numbers, converted one by one
//! through a lossless path that fails closed instead of corrupting output.

use crate::engine::Sequence;
use crate::error::{WorkerError, WorkerResult};
use crate::protocol::messages::Response;
use serde_json::{json, Number, Value};
use std::time::Duration;

/// Encode a computed sequence into a success response for `id`.
///
/// `duration` is the time spent strictly inside the engine call; the caller
/// measures it.
pub fn success(id: &str, n: u64, sequence: &Sequence, duration: Duration) -> WorkerResult<Response> {
    let duration_ms = duration.as_millis() as u64;

    let body = match sequence {
        Sequence::Standard(values) => {
            let mut encoded = Vec::with_capacity(values.len());
            for &value in values {
                // Unreachable while the guard ceiling holds; kept as the
                // fail-closed backstop against silent corruption.
                let number = Number::from_u128(value).ok_or(WorkerError::EncodingFailure)?;
                encoded.push(Value::Number(number));
            }
            json!({
                "sequence": encoded,
                "count": n,
                "duration_ms": duration_ms,
                "arbitrary_precision": false,
            })
        }
        Sequence::Arbitrary(values) => {
            let encoded: Vec<String> = values.iter().map(|value| value.to_string()).collect();
            json!({
                "sequence": encoded,
                "count": n,
                "duration_ms": duration_ms,
                "arbitrary_precision": true,
            })
        }
    };

    Ok(Response::ok(id, body))
}
