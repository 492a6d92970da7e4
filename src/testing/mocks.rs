//! Mock implementations for testing
//!
//! Provides a mock Transport that records every sent payload, enabling
//! end-to-end pipeline tests without a host message channel.

use crate::transport::{Transport, TransportError};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Mock transport for testing.
///
/// `send` records payloads in arrival order; `with_failure` builds a variant
/// whose sends always fail, for exercising the gateway's error handling.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
    pub message_sender: Arc<Mutex<Option<mpsc::Sender<String>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// All payloads sent so far, in send order.
    pub async fn get_sent(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.sent.lock().await.clear();
    }

    /// Inject an inbound payload as if the host had delivered it.
    pub async fn inject(&self, payload: &str) -> Result<(), TransportError> {
        let sender = self.message_sender.lock().await.clone();
        match sender {
            Some(sender) => sender
                .send(payload.to_string())
                .await
                .map_err(|_| TransportError::ChannelClosed),
            None => Err(TransportError::ChannelClosed),
        }
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    type Error = TransportError;

    async fn send(&self, payload: String) -> Result<(), Self::Error> {
        if self.should_fail {
            return Err(TransportError::SendFailed("mock send failure".to_string()));
        }

        self.sent.lock().await.push(payload);
        Ok(())
    }

    async fn set_message_sender(&self, sender: mpsc::Sender<String>) {
        *self.message_sender.lock().await = Some(sender);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_sends_in_order() {
        let transport = MockTransport::new();
        transport.send("first".to_string()).await.unwrap();
        transport.send("second".to_string()).await.unwrap();

        assert_eq!(transport.get_sent().await, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let transport = MockTransport::with_failure();
        let result = transport.send("payload".to_string()).await;

        assert!(result.is_err());
        assert!(transport.get_sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_inject_without_sender_fails() {
        let transport = MockTransport::new();
        assert!(transport.inject("{}").await.is_err());
    }

    #[tokio::test]
    async fn test_inject_forwards_to_registered_sender() {
        let transport = MockTransport::new();
        let (tx, mut rx) = mpsc::channel(1);
        transport.set_message_sender(tx).await;

        transport.inject(r#"{"n":1}"#).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), r#"{"n":1}"#);
    }
}
