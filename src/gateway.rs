//! Message gateway
//!
//! Glue between the host transport and the request pipeline. For every
//! inbound raw payload it runs Validator → Router → Guard → Engine → Encoder
//! and hands exactly one serialized response back to the transport. No
//! inbound value, however malformed, may stop the worker from processing
//! subsequent messages: every failure becomes a structured error response.
//!
//! Messages are processed strictly one at a time, in arrival order, each to
//! completion before the next is taken from the channel.

use crate::config::WorkerConfig;
use crate::encode;
use crate::engine::{self, guard};
use crate::error::WorkerError;
use crate::protocol::messages::{Response, UNKNOWN_ID};
use crate::routing;
use crate::transport::Transport;
use crate::validate;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Request gateway bound to a transport's send capability.
pub struct Gateway<T: Transport> {
    transport: Arc<T>,
    /// Advisory threshold above which an uncapped arbitrary-precision
    /// request is logged; it is never rejected.
    large_n_warn_threshold: u64,
}

impl<T: Transport + 'static> Gateway<T> {
    pub fn new(transport: Arc<T>, config: &WorkerConfig) -> Self {
        Self {
            transport,
            large_n_warn_threshold: config.limits.warn_above,
        }
    }

    /// Drain inbound payloads until the channel closes.
    ///
    /// Sequential by construction: each message is handled and its response
    /// sent before the next `recv`.
    pub async fn serve(self, mut inbound: mpsc::Receiver<String>) {
        info!("Gateway serving requests");
        while let Some(payload) = inbound.recv().await {
            self.handle_message(&payload).await;
        }
        info!("Inbound channel closed, gateway stopping");
    }

    /// Process one raw inbound payload and send exactly one response.
    #[tracing::instrument(name = "handle_message", skip(self, raw))]
    pub async fn handle_message(&self, raw: &str) {
        let response = self.respond(raw);

        info!(
            request_id = %response.id,
            status = response.status,
            "Request processed"
        );

        let payload = match serde_json::to_string(&response) {
            Ok(payload) => payload,
            Err(e) => {
                // Response bodies are plain JSON values, so this path is not
                // expected to be taken; the one-response-per-message contract
                // still has to hold.
                error!(error = %e, request_id = %response.id, "Failed to serialize response");
                let fallback = WorkerError::EncodingFailure.to_response(&response.id);
                serde_json::to_string(&fallback).unwrap_or_default()
            }
        };

        if let Err(e) = self.transport.send(payload).await {
            error!(error = %e, "Failed to send response");
        }
    }

    /// Run the full pipeline for one inbound payload. Infallible by design:
    /// every failure maps to an error response.
    fn respond(&self, raw: &str) -> Response {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(_) => {
                return WorkerError::malformed_message("Invalid message format: expected object")
                    .to_response(UNKNOWN_ID);
            }
        };

        let request = match validate::envelope(&value) {
            Ok(request) => request,
            Err(rejection) => return rejection.error.to_response(&rejection.id),
        };

        if let Err(e) = routing::route(&request.method, &request.path) {
            return e.to_response(&request.id);
        }

        let params = match validate::fib_params(request.body.as_ref()) {
            Ok(params) => params,
            Err(e) => return e.to_response(&request.id),
        };

        let precision = match guard::select(params.n, params.arbitrary_precision) {
            Ok(precision) => precision,
            Err(e) => return e.to_response(&request.id),
        };

        if params.arbitrary_precision && params.n > self.large_n_warn_threshold {
            warn!(
                request_id = %request.id,
                n = params.n,
                "Uncapped arbitrary-precision request; computation is unbounded and non-cancellable"
            );
        }

        let start = Instant::now();
        let sequence = engine::generate(params.n, precision);
        let elapsed = start.elapsed();

        match encode::success(&request.id, params.n, &sequence, elapsed) {
            Ok(response) => response,
            Err(e) => e.to_response(&request.id),
        }
    }
}
