//! Error types for the fibworker request pipeline
//!
//! Every pipeline failure is recoverable: it maps to a wire status (400 or
//! 404) and a human-readable message, and converts into a protocol
//! [`Response`] so the worker can keep accepting messages. Only transport
//! and configuration failures (their own error types) can stop the process,
//! and only at bootstrap.

use crate::protocol::messages::{Response, STATUS_BAD_REQUEST, STATUS_NOT_FOUND};
use serde_json::json;
use thiserror::Error;

/// Pipeline error taxonomy for the fibworker protocol.
///
/// Variants carry the exact wire message; [`WorkerError::status`] decides
/// the status code.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkerError {
    /// Inbound value is not an object-shaped message, or the body is not an
    /// object
    #[error("{message}")]
    MalformedMessage { message: String },

    /// A required envelope or body field is absent
    #[error("{message}")]
    MissingField { message: String },

    /// A field is present but carries the wrong JSON type
    #[error("{message}")]
    WrongFieldType { message: String },

    /// No operation registered for the request's method/path pair
    #[error("Endpoint not found")]
    RouteNotFound,

    /// `n` is not a usable sequence length (NaN, infinite, fractional,
    /// negative)
    #[error("{message}")]
    InvalidNumericInput { message: String },

    /// Standard mode cannot represent the requested sequence exactly
    #[error("Input exceeds safe limit ({limit}) for standard precision mode")]
    PrecisionOverflow { limit: u64 },

    /// A computed value could not be converted losslessly during final
    /// encoding
    #[error("Number too large for standard precision mode")]
    EncodingFailure,
}

impl WorkerError {
    /// Wire status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            WorkerError::RouteNotFound => STATUS_NOT_FOUND,
            _ => STATUS_BAD_REQUEST,
        }
    }

    /// Convert into a protocol response tagged with the given correlation id.
    pub fn to_response(&self, id: &str) -> Response {
        Response {
            status: self.status(),
            body: json!({ "error": self.to_string() }),
            id: id.to_string(),
        }
    }

    /// Create a malformed-message error
    pub fn malformed_message<S: Into<String>>(message: S) -> Self {
        Self::MalformedMessage {
            message: message.into(),
        }
    }

    /// Create a missing-field error
    pub fn missing_field<S: Into<String>>(message: S) -> Self {
        Self::MissingField {
            message: message.into(),
        }
    }

    /// Create a wrong-field-type error
    pub fn wrong_field_type<S: Into<String>>(message: S) -> Self {
        Self::WrongFieldType {
            message: message.into(),
        }
    }

    /// Create an invalid-numeric-input error
    pub fn invalid_numeric_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidNumericInput {
            message: message.into(),
        }
    }
}

/// Result type for pipeline operations
pub type WorkerResult<T> = Result<T, WorkerError>;
