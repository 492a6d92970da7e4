//! Protocol message structures
//!
//! The worker speaks a minimal HTTP-shaped envelope over an opaque message
//! channel: a `Request` carries method, path, correlation id, and a JSON
//! body; a `Response` echoes the id alongside a status code and body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel correlation id used when the inbound message's own id could not
/// be extracted. Error responses must still carry *some* id so the host can
/// account for every message.
pub const UNKNOWN_ID: &str = "unknown";

/// Status code for a successful computation.
pub const STATUS_OK: u16 = 200;
/// Status code for malformed or invalid input.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status code for an unknown method/path pair.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Inbound request envelope.
///
/// Produced by the validator from an untyped JSON value; `body` is kept
/// opaque here because routing is decided before the body is inspected.
///
/// # Examples
/// ```
/// use fibworker::protocol::Request;
/// use serde_json::json;
///
/// let request = Request {
///     method: "POST".to_string(),
///     path: "/fibonacci".to_string(),
///     id: "req-1".to_string(),
///     body: Some(json!({"n": 10})),
/// };
/// assert_eq!(request.path, "/fibonacci");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    /// HTTP-style method name
    pub method: String,
    /// Operation path
    pub path: String,
    /// Caller-supplied correlation id, echoed in the response
    pub id: String,
    /// Operation parameters; validated only after routing succeeds
    pub body: Option<Value>,
}

/// Outbound response envelope.
///
/// Exactly one is emitted per inbound message, success or failure, always
/// tagged with the request's correlation id (or [`UNKNOWN_ID`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    /// One of 200, 400, 404
    pub status: u16,
    /// Success payload or `{"error": ...}`
    pub body: Value,
    /// Correlation id echoed from the request
    pub id: String,
}

impl Response {
    /// Build a success response for the given correlation id.
    pub fn ok(id: &str, body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_roundtrip() {
        let request = Request {
            method: "POST".to_string(),
            path: "/fibonacci".to_string(),
            id: "abc-123".to_string(),
            body: Some(json!({"n": 5, "arbitrary_precision": true})),
        };

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: Request = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, request);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = Response::ok("abc-123", json!({"count": 0}));
        let encoded = serde_json::to_value(&response).unwrap();

        assert_eq!(encoded["status"], 200);
        assert_eq!(encoded["id"], "abc-123");
        assert_eq!(encoded["body"]["count"], 0);
    }

    #[test]
    fn test_response_status_codes_are_distinct() {
        assert_ne!(STATUS_OK, STATUS_BAD_REQUEST);
        assert_ne!(STATUS_BAD_REQUEST, STATUS_NOT_FOUND);
    }
}
