//! Tier-aware client over a [`ModelTransport`].
//!
//! The client applies the call contracts the orchestrator relies on:
//!
//! - `invoke_sync` trims the answer and passes transport errors through
//! - `invoke_stream` never fails; it turns transport failures into either a
//!   single fallback fragment (nothing yielded yet) or a silent end of stream.
//!   A panicking transport is handled like a failed request.

use super::chunk_stream::ChunkStream;
use crate::config::ChatParams;
use crate::ports::model_transport::{ModelTransport, TransportError};
use duet_domain::{Locale, ModelTier, TierConfig};
use futures::{FutureExt, StreamExt};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Remote model client shared by every turn.
///
/// Cloning is cheap: the transport and parameters are behind `Arc`s and are
/// never mutated after construction.
#[derive(Clone)]
pub struct ModelClient {
    transport: Arc<dyn ModelTransport>,
    params: Arc<ChatParams>,
}

impl ModelClient {
    pub fn new(transport: Arc<dyn ModelTransport>, params: ChatParams) -> Self {
        Self {
            transport,
            params: Arc::new(params),
        }
    }

    pub fn locale(&self) -> Locale {
        self.params.locale
    }

    pub fn tier(&self, tier: ModelTier) -> &TierConfig {
        self.params.tier(tier)
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Send one request for `tier` and return the answer trimmed.
    ///
    /// An empty answer is returned as-is; only transport failures are errors.
    pub async fn invoke_sync(&self, tier: ModelTier, prompt: &str) -> Result<String, TransportError> {
        let config = self.tier(tier);
        debug!(
            tier = %tier,
            model = %config.model_id,
            max_tokens = config.max_tokens,
            "Invoking model"
        );
        let text = self.transport.invoke(config, prompt).await?;
        Ok(text.trim().to_string())
    }

    /// Start a streaming request for `tier` and return its fragments.
    ///
    /// Spawns the pump task immediately, so the request is issued before the
    /// caller pulls anything. Must be called from within a Tokio runtime.
    pub fn invoke_stream(&self, tier: ModelTier, prompt: impl Into<String>) -> ChunkStream {
        let (tx, rx) = mpsc::channel(self.params.stream_buffer.max(1));
        let transport = Arc::clone(&self.transport);
        let config = self.tier(tier).clone();
        let fallback = self.locale().stream_fallback_notice();
        let prompt = prompt.into();

        tokio::spawn(async move {
            let mut yielded = 0usize;
            let pumped = AssertUnwindSafe(pump_stream(
                transport,
                tier,
                config,
                prompt,
                fallback,
                &tx,
                &mut yielded,
            ))
            .catch_unwind()
            .await;

            if pumped.is_err() {
                warn!(tier = %tier, fragments = yielded, "Stream pump panicked");
                if yielded == 0 {
                    let _ = tx.send(fallback.to_string()).await;
                }
            }
        });

        ChunkStream::from_receiver(rx)
    }
}

/// Forward text deltas from the transport into `tx` until the stream ends.
///
/// `yielded` counts the fragments sent so far.
async fn pump_stream(
    transport: Arc<dyn ModelTransport>,
    tier: ModelTier,
    config: TierConfig,
    prompt: String,
    fallback: &'static str,
    tx: &mpsc::Sender<String>,
    yielded: &mut usize,
) {
    debug!(tier = %tier, model = %config.model_id, "Opening model stream");

    let mut events = match transport.open_stream(&config, &prompt).await {
        Ok(events) => events,
        Err(e) => {
            warn!(tier = %tier, error = %e, "Stream request failed; yielding fallback notice");
            let _ = tx.send(fallback.to_string()).await;
            return;
        }
    };

    while let Some(item) = events.next().await {
        match item {
            Ok(event) if event.is_terminal() => break,
            Ok(event) => {
                let Some(text) = event.text() else {
                    continue;
                };
                if tx.send(text.to_string()).await.is_err() {
                    debug!(tier = %tier, "Chunk consumer dropped; stopping stream");
                    return;
                }
                *yielded += 1;
            }
            Err(e) if e.is_malformed_event() => {
                debug!(tier = %tier, error = %e, "Skipping malformed stream event");
            }
            Err(e) if *yielded == 0 => {
                warn!(tier = %tier, error = %e, "Stream failed before any text; yielding fallback notice");
                let _ = tx.send(fallback.to_string()).await;
                return;
            }
            Err(e) => {
                warn!(
                    tier = %tier,
                    fragments = *yielded,
                    error = %e,
                    "Stream failed mid-answer; ending early"
                );
                return;
            }
        }
    }

    debug!(tier = %tier, fragments = *yielded, "Model stream finished");
}
