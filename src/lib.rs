//! fibworker - dual-precision Fibonacci compute worker
//!
//! A single-purpose worker that receives serialized requests over an opaque
//! message channel, validates and routes them, computes a Fibonacci sequence
//! under one of two numeric precision modes, and returns a serialized,
//! correlation-tagged response over the same channel.
//!
//! # Overview
//!
//! This crate provides:
//! - Protocol message types and a strictly ordered request validator
//! - A single-operation router (`POST /fibonacci`)
//! - A precision guard selecting between fixed-width and arbitrary-precision
//!   engine strategies
//! - A response encoder that keeps large integers exact on the wire
//! - A gateway that processes one message at a time, forever
//!
//! # Quick Start
//!
//! ```rust
//! use fibworker::engine::{self, guard};
//! use fibworker::protocol::Response;
//! use serde_json::json;
//!
//! // Standard mode is safe up to index 98; beyond that the guard rejects.
//! let precision = guard::select(10, false).unwrap();
//! let sequence = engine::generate(10, precision);
//! assert_eq!(sequence.len(), 10);
//!
//! // Responses serialize to JSON for the message channel.
//! let response = Response::ok("req-1", json!({"count": 10}));
//! let wire = serde_json::to_string(&response).unwrap();
//! assert!(wire.contains("\"req-1\""));
//! ```

pub mod config;
pub mod encode;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod observability;
pub mod protocol;
pub mod routing;
pub mod testing;
pub mod transport;
pub mod validate;

pub use config::{ConfigError, WorkerConfig};
pub use engine::guard::{Precision, STANDARD_PRECISION_LIMIT};
pub use error::{WorkerError, WorkerResult};
pub use gateway::Gateway;
pub use protocol::{Request, Response, UNKNOWN_ID};
pub use transport::{StdioTransport, Transport, TransportError};
