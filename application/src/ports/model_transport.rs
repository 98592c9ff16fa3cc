//! Model transport port
//!
//! Defines the interface for talking to the remote text-generation service.

use async_trait::async_trait;
use duet_domain::{StreamEvent, TierConfig};
use futures::stream::BoxStream;
use thiserror::Error;

/// Errors that can occur during transport operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A single stream event could not be decoded. The stream itself is still usable.
    #[error("Malformed stream event: {0}")]
    MalformedEvent(String),

    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),
}

impl TransportError {
    /// Whether this error only affects one event rather than the whole stream.
    pub fn is_malformed_event(&self) -> bool {
        matches!(self, TransportError::MalformedEvent(_))
    }
}

/// Decoded deep-tier events as they arrive from the transport.
pub type EventStream = BoxStream<'static, Result<StreamEvent, TransportError>>;

/// Transport to the inference service
///
/// Implementations (adapters) live in the infrastructure layer. They hold the
/// connection, timeout and retry policy and must be safe to share between the
/// two concurrent tasks of a turn.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Short identifier for logs (e.g. "bedrock").
    fn name(&self) -> &str;

    /// Send one request and wait for the full answer text (untrimmed).
    async fn invoke(&self, tier: &TierConfig, prompt: &str) -> Result<String, TransportError>;

    /// Issue a streaming request and return its decoded events.
    ///
    /// Returns once the request has been accepted; events are produced lazily.
    async fn open_stream(
        &self,
        tier: &TierConfig,
        prompt: &str,
    ) -> Result<EventStream, TransportError>;
}
