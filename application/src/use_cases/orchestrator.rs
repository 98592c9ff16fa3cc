//! Dual-tier chat orchestration.
//!
//! One turn runs exactly two concurrent tasks:
//!
//! ```text
//!            ┌─ Task A: invoke_sync(Fast)  ──► FastResult ─┐
//! chat(q) ───┤                                             ├─► OrchestrationResult
//!            └─ Task B: invoke_stream(Deep) ─► ChunkStream ┘
//! ```
//!
//! Both tasks are spawned before either is awaited. The orchestrator then
//! waits for Task A only and hands the still-open chunk stream back to the
//! caller, so time-to-first-answer never depends on the deep tier.

use crate::client::{ChunkStream, ModelClient};
use crate::ports::output_sink::OutputSink;
use duet_domain::util::preview;
use duet_domain::{FastResult, ModelTier, PromptTemplate, Query, TurnTranscript};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Output of one chat turn.
///
/// Holds the fast result as a plain value and the deep answer as a lazy
/// stream. The fast result is always available before the stream can be
/// consumed: [`render`](Self::render) emits it first, and
/// [`into_parts`](Self::into_parts) returns it ahead of the stream.
#[derive(Debug)]
pub struct OrchestrationResult {
    fast: FastResult,
    chunks: ChunkStream,
}

impl OrchestrationResult {
    pub fn new(fast: FastResult, chunks: ChunkStream) -> Self {
        Self { fast, chunks }
    }

    pub fn fast(&self) -> &FastResult {
        &self.fast
    }

    pub fn into_parts(self) -> (FastResult, ChunkStream) {
        (self.fast, self.chunks)
    }

    /// Render the turn into `sink`: fast result, every fragment in order, completion.
    pub async fn render(self, sink: &mut dyn OutputSink) -> TurnTranscript {
        let (fast, mut chunks) = self.into_parts();
        sink.on_fast_result(&fast);

        let started = Instant::now();
        let mut transcript = TurnTranscript::new(fast);
        while let Some(chunk) = chunks.next_chunk().await {
            sink.on_chunk(&chunk);
            transcript.push_fragment(&chunk);
        }
        transcript.deep_elapsed = started.elapsed();

        sink.on_turn_complete(&transcript);
        transcript
    }
}

/// Coordinates the fast and deep tiers for each query.
///
/// The client is injected at construction and shared read-only by every turn.
#[derive(Clone)]
pub struct Orchestrator {
    client: ModelClient,
}

impl Orchestrator {
    pub fn new(client: ModelClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ModelClient {
        &self.client
    }

    /// Run one turn. Never fails: both tiers degrade to localized notices.
    pub async fn chat(&self, query: &Query) -> OrchestrationResult {
        let locale = self.client.locale();
        let prompts = PromptTemplate::build(query, locale);

        info!(
            transport = self.client.transport_name(),
            query = %preview(query.text(), 80),
            "Starting chat turn"
        );

        let started = Instant::now();

        // Task A: fast tier, single round trip
        let fast_client = self.client.clone();
        let fast_prompt = prompts.fast_prompt;
        let fast_task = tokio::spawn(async move {
            fast_client.invoke_sync(ModelTier::Fast, &fast_prompt).await
        });

        // Task B: deep tier, streamed; spawned inside invoke_stream
        let chunks = self.client.invoke_stream(ModelTier::Deep, prompts.deep_prompt);

        let fast = match fast_task.await {
            Ok(Ok(text)) => {
                let elapsed = started.elapsed();
                debug!(elapsed_ms = elapsed.as_millis() as u64, "Fast tier answered");
                FastResult::answered(text, elapsed)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Fast tier failed; using degraded message");
                FastResult::degraded(locale.degraded_fast_message(), started.elapsed())
            }
            Err(e) => {
                warn!(error = %e, "Fast tier task did not complete; using degraded message");
                FastResult::degraded(locale.degraded_fast_message(), started.elapsed())
            }
        };

        OrchestrationResult::new(fast, chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatParams;
    use crate::ports::model_transport::{EventStream, ModelTransport, TransportError};
    use async_trait::async_trait;
    use duet_domain::{ControlKind, FastResult, Locale, StreamEvent, TierConfig};
    use futures::StreamExt;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    #[derive(Clone)]
    enum FastBehavior {
        Answer(String),
        EchoPrompt,
        Fail(TransportError),
    }

    #[derive(Clone)]
    enum DeepBehavior {
        Events(Vec<Result<StreamEvent, TransportError>>),
        FailOpen(TransportError),
    }

    struct MockTransport {
        fast: FastBehavior,
        fast_delay: Duration,
        deep: DeepBehavior,
        deep_delay: Duration,
        fast_prompts: Mutex<Vec<String>>,
        deep_prompts: Mutex<Vec<String>>,
    }

    impl MockTransport {
        fn new(fast: FastBehavior, deep: DeepBehavior) -> Self {
            Self {
                fast,
                fast_delay: Duration::ZERO,
                deep,
                deep_delay: Duration::ZERO,
                fast_prompts: Mutex::new(Vec::new()),
                deep_prompts: Mutex::new(Vec::new()),
            }
        }

        fn with_fast_delay(mut self, delay: Duration) -> Self {
            self.fast_delay = delay;
            self
        }

        fn with_deep_delay(mut self, delay: Duration) -> Self {
            self.deep_delay = delay;
            self
        }
    }

    #[async_trait]
    impl ModelTransport for MockTransport {
        fn name(&self) -> &str {
            "mock"
        }

        async fn invoke(&self, _tier: &TierConfig, prompt: &str) -> Result<String, TransportError> {
            self.fast_prompts.lock().unwrap().push(prompt.to_string());
            tokio::time::sleep(self.fast_delay).await;
            match &self.fast {
                FastBehavior::Answer(text) => Ok(text.clone()),
                FastBehavior::EchoPrompt => Ok(prompt.to_string()),
                FastBehavior::Fail(e) => Err(e.clone()),
            }
        }

        async fn open_stream(
            &self,
            _tier: &TierConfig,
            prompt: &str,
        ) -> Result<EventStream, TransportError> {
            self.deep_prompts.lock().unwrap().push(prompt.to_string());
            tokio::time::sleep(self.deep_delay).await;
            match &self.deep {
                DeepBehavior::Events(events) => Ok(futures::stream::iter(events.clone()).boxed()),
                DeepBehavior::FailOpen(e) => Err(e.clone()),
            }
        }
    }

    /// Records every sink call in order.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl OutputSink for RecordingSink {
        fn on_fast_result(&mut self, fast: &FastResult) {
            self.calls.push(format!("fast:{}", fast.text));
        }

        fn on_chunk(&mut self, chunk: &str) {
            self.calls.push(format!("chunk:{}", chunk));
        }

        fn on_turn_complete(&mut self, transcript: &TurnTranscript) {
            self.calls.push(format!("done:{}", transcript.fragments));
        }
    }

    fn hello_world_events() -> Vec<Result<StreamEvent, TransportError>> {
        vec![
            Ok(StreamEvent::Control(ControlKind::ContentBlockStart)),
            Ok(StreamEvent::delta("Hel")),
            Ok(StreamEvent::delta("lo, ")),
            Ok(StreamEvent::Control(ControlKind::Metadata)),
            Ok(StreamEvent::delta("world!")),
        ]
    }

    fn orchestrator(transport: Arc<MockTransport>) -> Orchestrator {
        Orchestrator::new(ModelClient::new(transport, ChatParams::default()))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_chat_concatenates_deep_fragments() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::Answer("Got it!".to_string()),
            DeepBehavior::Events(hello_world_events()),
        ));
        let result = orchestrator(transport).chat(&Query::new("greet me")).await;

        let (fast, chunks) = result.into_parts();
        assert_eq!(fast.text, "Got it!");
        assert!(!fast.is_degraded());
        assert_eq!(chunks.collect_text().await, "Hello, world!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_result_does_not_wait_for_deep_tier() {
        let mut times = Vec::new();
        for deep_delay in [Duration::from_secs(5), Duration::from_secs(60)] {
            let transport = Arc::new(
                MockTransport::new(
                    FastBehavior::Answer("ack".to_string()),
                    DeepBehavior::Events(hello_world_events()),
                )
                .with_fast_delay(Duration::from_millis(100))
                .with_deep_delay(deep_delay),
            );
            let orchestrator = orchestrator(transport);

            let started = Instant::now();
            let result = orchestrator.chat(&Query::new("slow deep")).await;
            times.push(started.elapsed());
            assert_eq!(result.fast().text, "ack");
        }

        assert_eq!(times[0], times[1]);
        assert!(times[0] < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deep_request_issued_before_fast_completes() {
        let transport = Arc::new(
            MockTransport::new(
                FastBehavior::Answer("ack".to_string()),
                DeepBehavior::Events(hello_world_events()),
            )
            .with_fast_delay(Duration::from_secs(2)),
        );
        let orchestrator = orchestrator(Arc::clone(&transport));

        let result = orchestrator.chat(&Query::new("parallel?")).await;

        // The deep request was sent while the fast one was still in flight,
        // even though nothing has pulled from the stream yet.
        assert_eq!(transport.deep_prompts.lock().unwrap().len(), 1);
        let (_, chunks) = result.into_parts();
        assert_eq!(chunks.collect_text().await, "Hello, world!");
    }

    #[tokio::test]
    async fn test_render_emits_fast_result_before_chunks() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::Answer("Got it!".to_string()),
            DeepBehavior::Events(hello_world_events()),
        ));
        let result = orchestrator(transport).chat(&Query::new("order")).await;

        let mut sink = RecordingSink::default();
        let transcript = result.render(&mut sink).await;

        assert_eq!(
            sink.calls,
            vec![
                "fast:Got it!".to_string(),
                "chunk:Hel".to_string(),
                "chunk:lo, ".to_string(),
                "chunk:world!".to_string(),
                "done:3".to_string(),
            ]
        );
        assert_eq!(transcript.deep_text, "Hello, world!");
        assert_eq!(transcript.fast.text, "Got it!");
    }

    #[tokio::test]
    async fn test_fast_failure_degrades_to_message() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::Fail(TransportError::Timeout),
            DeepBehavior::Events(hello_world_events()),
        ));
        let result = orchestrator(transport).chat(&Query::new("fail fast")).await;

        assert!(result.fast().is_degraded());
        assert!(!result.fast().text.is_empty());
        assert_eq!(result.fast().text, Locale::Korean.degraded_fast_message());

        // The deep answer is unaffected.
        let (_, chunks) = result.into_parts();
        assert_eq!(chunks.collect_text().await, "Hello, world!");
    }

    #[tokio::test]
    async fn test_deep_open_failure_yields_one_fallback_fragment() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::Answer("ack".to_string()),
            DeepBehavior::FailOpen(TransportError::ConnectionError("refused".to_string())),
        ));
        let result = orchestrator(transport).chat(&Query::new("fail deep")).await;

        let (fast, chunks) = result.into_parts();
        assert_eq!(fast.text, "ack");
        let fragments: Vec<String> = chunks.collect().await;
        assert_eq!(fragments.len(), 1);
        assert!(!fragments[0].trim().is_empty());
    }

    #[tokio::test]
    async fn test_both_tiers_failing_still_produces_output() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::Fail(TransportError::RequestFailed("throttled".to_string())),
            DeepBehavior::FailOpen(TransportError::Timeout),
        ));
        let result = orchestrator(transport).chat(&Query::new("everything is down")).await;

        let mut sink = RecordingSink::default();
        let transcript = result.render(&mut sink).await;

        assert!(transcript.fast.is_degraded());
        assert_eq!(transcript.fragments, 1);
        assert_eq!(sink.calls.len(), 3);
    }

    #[tokio::test]
    async fn test_sequential_turns_are_isolated() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::EchoPrompt,
            DeepBehavior::Events(hello_world_events()),
        ));
        let orchestrator = orchestrator(Arc::clone(&transport));

        let first = orchestrator.chat(&Query::new("first question")).await;
        let first_fast = first.fast().text.clone();
        first.render(&mut crate::ports::output_sink::NoOutput).await;

        let second = orchestrator.chat(&Query::new("second question")).await;
        let second_fast = second.fast().text.clone();
        let (_, chunks) = second.into_parts();
        assert_eq!(chunks.collect_text().await, "Hello, world!");

        assert!(first_fast.contains("first question"));
        assert!(second_fast.contains("second question"));
        assert!(!second_fast.contains("first question"));

        let deep_prompts = transport.deep_prompts.lock().unwrap();
        assert_eq!(deep_prompts.len(), 2);
        assert!(deep_prompts[1].contains("second question"));
        assert!(!deep_prompts[1].contains("first question"));
    }

    #[tokio::test]
    async fn test_prompts_follow_locale() {
        let transport = Arc::new(MockTransport::new(
            FastBehavior::EchoPrompt,
            DeepBehavior::Events(vec![]),
        ));
        let orchestrator = Orchestrator::new(ModelClient::new(
            Arc::clone(&transport) as Arc<dyn ModelTransport>,
            ChatParams::default().with_locale(Locale::English),
        ));

        let result = orchestrator.chat(&Query::new("What is Rust?")).await;
        assert!(result.fast().text.contains("Answer in English"));
    }
}
