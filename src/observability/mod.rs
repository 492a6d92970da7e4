//! Observability: structured logging
//!
//! Logging setup and configuration for the worker process.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
