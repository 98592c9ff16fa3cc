//! Deep-tier event stream with a per-read deadline
//!
//! The SDK read timeout only covers the first byte of a response. After the
//! first event each `recv` is bounded here instead, so a connection that
//! stays open but goes silent ends the stream with `TransportError::Timeout`.

use super::types;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::primitives::event_stream::EventReceiver;
use aws_sdk_bedrockruntime::types::ResponseStream;
use aws_sdk_bedrockruntime::types::error::ResponseStreamError;
use duet_application::ports::model_transport::{EventStream, TransportError};
use futures::StreamExt;
use std::time::Duration;
use tracing::warn;

/// Source of raw Bedrock stream events.
#[async_trait]
pub(crate) trait EventSource: Send + 'static {
    /// Next event, `Ok(None)` once the stream is finished.
    async fn recv(&mut self) -> Result<Option<ResponseStream>, TransportError>;
}

#[async_trait]
impl EventSource for EventReceiver<ResponseStream, ResponseStreamError> {
    async fn recv(&mut self) -> Result<Option<ResponseStream>, TransportError> {
        EventReceiver::recv(self)
            .await
            .map_err(|e| types::convert_sdk_error(&e))
    }
}

/// Decode events from `source`, waiting at most `read_timeout` for each one.
///
/// The source is dropped after the first error or timeout.
pub(crate) fn timed_event_stream<S: EventSource>(source: S, read_timeout: Duration) -> EventStream {
    futures::stream::unfold(Some(source), move |source| async move {
        let mut source = source?;
        match tokio::time::timeout(read_timeout, source.recv()).await {
            Ok(Ok(Some(event))) => Some((types::decode_stream_event(&event), Some(source))),
            Ok(Ok(None)) => None,
            Ok(Err(e)) => Some((Err(e), None)),
            Err(_) => {
                warn!(
                    timeout_secs = read_timeout.as_secs(),
                    "No stream event within read timeout"
                );
                Some((Err(TransportError::Timeout), None))
            }
        }
    })
    .boxed()
}
