//! Testing utilities
//!
//! Mock transport implementation for exercising the gateway without a real
//! host channel.

pub mod mocks;

pub use mocks::MockTransport;
