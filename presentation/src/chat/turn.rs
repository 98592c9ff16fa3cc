//! One chat turn rendered to the console

use crate::output::console::ConsoleSink;
use crate::output::labels::Labels;
use crate::progress::spinner::FastSpinner;
use duet_application::Orchestrator;
use duet_domain::{Query, TurnTranscript};
use std::io::Write;
use tracing::info;

/// Run `query` through the orchestrator and render it into `sink`.
///
/// The spinner covers the wait for the fast tier only; it is cleared before
/// the fast result is printed.
pub async fn run_turn<W: Write + Send>(
    orchestrator: &Orchestrator,
    query: &Query,
    sink: &mut ConsoleSink<W>,
    quiet: bool,
) -> TurnTranscript {
    let labels = Labels::for_locale(orchestrator.client().locale());
    sink.begin_turn(query);

    let spinner = FastSpinner::start(labels.waiting_fast, quiet);
    let result = orchestrator.chat(query).await;
    spinner.finish();

    let transcript = result.render(sink).await;
    info!(
        fast_degraded = transcript.fast.is_degraded(),
        fragments = transcript.fragments,
        "Turn rendered"
    );
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use duet_application::{
        ChatParams, EventStream, ModelClient, ModelTransport, TransportError,
    };
    use duet_domain::{ControlKind, Locale, StreamEvent, TierConfig};
    use futures::StreamExt;
    use std::sync::Arc;

    struct CannedTransport;

    #[async_trait]
    impl ModelTransport for CannedTransport {
        fn name(&self) -> &str {
            "canned"
        }

        async fn invoke(&self, _tier: &TierConfig, _prompt: &str) -> Result<String, TransportError> {
            Ok("  short answer  ".to_string())
        }

        async fn open_stream(
            &self,
            _tier: &TierConfig,
            _prompt: &str,
        ) -> Result<EventStream, TransportError> {
            let events = vec![
                Ok(StreamEvent::Control(ControlKind::MessageStart)),
                Ok(StreamEvent::delta("Hel")),
                Ok(StreamEvent::delta("lo, ")),
                Ok(StreamEvent::delta("world!")),
                Ok(StreamEvent::Control(ControlKind::MessageStop)),
            ];
            Ok(futures::stream::iter(events).boxed())
        }
    }

    fn orchestrator(locale: Locale) -> Orchestrator {
        let params = ChatParams::default().with_locale(locale);
        Orchestrator::new(ModelClient::new(Arc::new(CannedTransport), params))
    }

    #[tokio::test]
    async fn test_turn_renders_fast_then_deep() {
        let orchestrator = orchestrator(Locale::English);
        let mut sink = ConsoleSink::new(Vec::new(), Locale::English);

        let transcript =
            run_turn(&orchestrator, &Query::new("What is Rust?"), &mut sink, true).await;

        assert_eq!(transcript.fast.text, "short answer");
        assert_eq!(transcript.deep_text, "Hello, world!");
        assert_eq!(transcript.fragments, 3);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let query = output.find("What is Rust?").unwrap();
        let fast = output.find("short answer").unwrap();
        let deep = output.find("Hello, world!").unwrap();
        assert!(query < fast && fast < deep);
    }
}
