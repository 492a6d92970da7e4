//! Wire message types for the fibworker protocol
//!
//! Defines the request/response envelope exchanged with the host message
//! channel. One request in, one correlation-tagged response out.

pub mod messages;

pub use messages::*;
