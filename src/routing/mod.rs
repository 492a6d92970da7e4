//! Request routing
//!
//! The worker exposes exactly one operation. Routing is a pure match on the
//! method/path pair, checked after the envelope is validated and before the
//! body is inspected; a mismatch short-circuits with 404 regardless of body
//! contents.

use crate::error::{WorkerError, WorkerResult};

/// Method of the single supported operation.
pub const FIBONACCI_METHOD: &str = "POST";
/// Path of the single supported operation.
pub const FIBONACCI_PATH: &str = "/fibonacci";

/// Match the request against the supported operation.
pub fn route(method: &str, path: &str) -> WorkerResult<()> {
    if method == FIBONACCI_METHOD && path == FIBONACCI_PATH {
        Ok(())
    } else {
        Err(WorkerError::RouteNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_operation_routes() {
        assert!(route("POST", "/fibonacci").is_ok());
    }

    #[test]
    fn test_wrong_method_is_not_found() {
        assert_eq!(route("GET", "/fibonacci"), Err(WorkerError::RouteNotFound));
    }

    #[test]
    fn test_wrong_path_is_not_found() {
        assert_eq!(route("POST", "/primes"), Err(WorkerError::RouteNotFound));
        assert_eq!(route("POST", "/fibonacci/"), Err(WorkerError::RouteNotFound));
    }

    #[test]
    fn test_method_is_case_sensitive() {
        assert_eq!(route("post", "/fibonacci"), Err(WorkerError::RouteNotFound));
    }
}
