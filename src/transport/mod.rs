//! Transport layer for host communication
//!
//! The core needs exactly two capabilities from its host: a stream of
//! inbound raw payloads and a way to emit one serialized response per
//! request. This trait abstracts both so the gateway can be driven by the
//! real stdio channel or by a mock in tests; registration is explicit
//! (a channel sender handed to the transport), never a process-global hook.

use tokio::sync::mpsc;

pub mod stdio;

pub use stdio::{StdioTransport, TransportError};

/// Transport abstraction over the host message channel.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Emit one serialized response to the host. Called exactly once per
    /// inbound message.
    async fn send(&self, payload: String) -> Result<(), Self::Error>;

    /// Register the sender that inbound raw payloads are forwarded to.
    async fn set_message_sender(&self, sender: mpsc::Sender<String>);
}
