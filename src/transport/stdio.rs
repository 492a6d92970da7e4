//! Line-delimited stdio transport
//!
//! Concrete host adapter: one JSON document per line on stdin, one JSON
//! response per line on stdout. Delivery guarantees beyond that are the
//! host's problem. The receive loop runs until stdin reaches EOF, which is
//! the host's shutdown signal.

use crate::transport::Transport;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

/// Errors raised by the stdio message channel.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Message channel I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inbound channel closed before message could be forwarded")]
    ChannelClosed,

    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Transport over the process's stdin/stdout.
pub struct StdioTransport {
    stdout: Mutex<tokio::io::Stdout>,
    message_sender: Mutex<Option<mpsc::Sender<String>>>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
            message_sender: Mutex::new(None),
        }
    }

    /// Read newline-delimited payloads from stdin and forward each to the
    /// registered sender. Returns when stdin reaches EOF.
    pub async fn run_receive_loop(&self) -> Result<(), TransportError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let sender = self.message_sender.lock().await.clone();
            match sender {
                Some(sender) => {
                    debug!(bytes = line.len(), "Forwarding inbound message");
                    sender
                        .send(line)
                        .await
                        .map_err(|_| TransportError::ChannelClosed)?;
                }
                None => {
                    warn!("Inbound message received before a handler was registered - dropped");
                }
            }
        }

        debug!("stdin reached EOF");
        self.clear_message_sender().await;
        Ok(())
    }

    /// Drop the registered sender so the gateway's inbound channel closes
    /// and its serve loop can finish.
    pub async fn clear_message_sender(&self) {
        *self.message_sender.lock().await = None;
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for StdioTransport {
    type Error = TransportError;

    async fn send(&self, payload: String) -> Result<(), Self::Error> {
        let mut stdout = self.stdout.lock().await;
        stdout.write_all(payload.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }

    async fn set_message_sender(&self, sender: mpsc::Sender<String>) {
        *self.message_sender.lock().await = Some(sender);
    }
}
