//! Transport registration and message flow tests
//!
//! Verifies the explicit handler-registration seam: inbound payloads flow
//! through the sender registered on the transport, and every response comes
//! back through the same transport's send capability.

use fibworker::config::WorkerConfig;
use fibworker::gateway::Gateway;
use fibworker::protocol::Response;
use fibworker::testing::mocks::MockTransport;
use fibworker::transport::Transport;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_inject_through_registered_sender() {
    let transport = Arc::new(MockTransport::new());
    let gateway = Gateway::new(transport.clone(), &WorkerConfig::test_config());

    let (tx, rx) = mpsc::channel(8);
    transport.set_message_sender(tx).await;

    let serve = tokio::spawn(gateway.serve(rx));

    transport
        .inject(r#"{"method":"POST","path":"/fibonacci","id":"flow-1","body":{"n":6}}"#)
        .await
        .unwrap();
    transport
        .inject(r#"{"method":"POST","path":"/fibonacci","id":"flow-2","body":{"n":0}}"#)
        .await
        .unwrap();

    // Closing the inbound channel ends the serve loop after in-flight work.
    *transport.message_sender.lock().await = None;
    serve.await.unwrap();

    let sent = transport.get_sent().await;
    assert_eq!(sent.len(), 2);

    let first: Response = serde_json::from_str(&sent[0]).unwrap();
    let second: Response = serde_json::from_str(&sent[1]).unwrap();
    assert_eq!(first.id, "flow-1");
    assert_eq!(first.body["count"], 6);
    assert_eq!(second.id, "flow-2");
    assert_eq!(second.body["count"], 0);
}

#[tokio::test]
async fn test_unregistered_transport_rejects_injection() {
    let transport = MockTransport::new();
    assert!(transport.inject("{}").await.is_err());
}
