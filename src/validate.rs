//! Request validation
//!
//! Turns an untyped inbound JSON value into a well-formed [`Request`] plus
//! validated operation parameters, or a structured rejection. Validation is
//! a single fallible parse evaluated in a fixed order (first failure wins),
//! in two stages:
//!
//! 1. Envelope stage ([`envelope`]): object shape, `id` extraction, presence
//!    and types of `method`/`path`/`id`.
//! 2. Body stage ([`fib_params`]): presence and shape of `body`, the `n`
//!    field, and the optional `arbitrary_precision` flag.
//!
//! The router runs between the stages, so a wrong route short-circuits
//! before the body is inspected — but an envelope type error still wins over
//! a 404. That precedence is inherited from the original protocol and must
//! not change.

use crate::error::WorkerError;
use crate::protocol::messages::{Request, UNKNOWN_ID};
use serde_json::Value;

/// A validation failure plus the best-effort correlation id to report it
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub error: WorkerError,
    pub id: String,
}

impl Rejection {
    fn unknown(error: WorkerError) -> Self {
        Self {
            error,
            id: UNKNOWN_ID.to_string(),
        }
    }
}

/// Validated operation parameters extracted from the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibParams {
    /// Requested sequence length
    pub n: u64,
    /// Whether the caller opted into arbitrary-precision output
    pub arbitrary_precision: bool,
}

/// Envelope stage: shape-check the inbound value and extract
/// `method`/`path`/`id`.
///
/// The `id` is extracted before the joint presence check so every later
/// failure in this request reports against it; a non-string or absent id
/// leaves the sentinel `"unknown"` in place.
pub fn envelope(value: &Value) -> Result<Request, Rejection> {
    let Some(object) = value.as_object() else {
        return Err(Rejection::unknown(WorkerError::malformed_message(
            "Invalid message format: expected object",
        )));
    };

    let id = object
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ID)
        .to_string();

    let method = object.get("method");
    let path = object.get("path");
    let id_field = object.get("id");

    if method.is_none() || path.is_none() || id_field.is_none() {
        return Err(Rejection {
            error: WorkerError::missing_field("Missing required fields: method, path, or id"),
            id,
        });
    }

    let (Some(method), Some(path), Some(id_value)) = (
        method.and_then(Value::as_str),
        path.and_then(Value::as_str),
        id_field.and_then(Value::as_str),
    ) else {
        return Err(Rejection {
            error: WorkerError::wrong_field_type(
                "Invalid field types: method, path, and id must be strings",
            ),
            id,
        });
    };

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        id: id_value.to_string(),
        body: object.get("body").cloned(),
    })
}

/// Body stage: validate `body`, `n`, and the `arbitrary_precision` flag.
///
/// `arbitrary_precision` is forgiving: any non-boolean type (or absence)
/// defaults to `false` and is never an error.
pub fn fib_params(body: Option<&Value>) -> Result<FibParams, WorkerError> {
    let body = body.ok_or_else(|| WorkerError::missing_field("Missing required field: body"))?;

    let object = body
        .as_object()
        .ok_or_else(|| WorkerError::malformed_message("Invalid body format: expected object"))?;

    let n_value = object
        .get("n")
        .ok_or_else(|| WorkerError::missing_field("Missing required field 'n' in body"))?;

    let n = sequence_length(n_value)?;

    let arbitrary_precision = object
        .get("arbitrary_precision")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(FibParams {
        n,
        arbitrary_precision,
    })
}

/// Interpret the `n` field as a non-negative integer sequence length.
///
/// Check order is fixed: numeric type, finiteness, integrality, sign.
fn sequence_length(value: &Value) -> Result<u64, WorkerError> {
    let Value::Number(number) = value else {
        return Err(WorkerError::invalid_numeric_input(
            "Invalid 'n' field: must be a number",
        ));
    };

    if let Some(n) = number.as_u64() {
        return Ok(n);
    }

    // Negative integer: skips straight past the finiteness and integrality
    // checks, which it trivially passes.
    if number.as_i64().is_some() {
        return Err(WorkerError::invalid_numeric_input(
            "Input must be non-negative",
        ));
    }

    let Some(n) = number.as_f64() else {
        return Err(WorkerError::invalid_numeric_input(
            "Invalid 'n' field: must be a number",
        ));
    };

    if !n.is_finite() {
        return Err(WorkerError::invalid_numeric_input(
            "Invalid 'n' field: cannot be NaN or infinity",
        ));
    }

    if n.fract() != 0.0 {
        return Err(WorkerError::invalid_numeric_input(
            "Invalid 'n' field: must be an integer",
        ));
    }

    if n < 0.0 {
        return Err(WorkerError::invalid_numeric_input(
            "Input must be non-negative",
        ));
    }

    // Integral and non-negative but past u64: the float encoding cannot name
    // an exact index up there, so it is not a usable integer length.
    if n > u64::MAX as f64 {
        return Err(WorkerError::invalid_numeric_input(
            "Invalid 'n' field: must be an integer",
        ));
    }

    Ok(n as u64)
}
