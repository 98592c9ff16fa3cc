//! Console output sink for chat turns

use super::labels::Labels;
use colored::Colorize;
use duet_application::OutputSink;
use duet_domain::{FastResult, Locale, Query, TurnTranscript};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Writes each turn to a terminal as it arrives.
///
/// Fragments are written without separators and flushed one by one so the
/// deep answer appears as it is generated. Write failures are ignored: a
/// closed stdout must not abort the turn.
pub struct ConsoleSink<W: Write + Send = io::Stdout> {
    out: W,
    labels: &'static Labels,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(locale: Locale) -> Self {
        Self::new(io::stdout(), locale)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W, locale: Locale) -> Self {
        Self {
            out,
            labels: Labels::for_locale(locale),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the query banner that opens a turn.
    pub fn begin_turn(&mut self, query: &Query) {
        let _ = writeln!(
            self.out,
            "\n{} {}\n{}",
            self.labels.query.cyan().bold(),
            query,
            rule()
        );
        let _ = self.out.flush();
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

impl<W: Write + Send> OutputSink for ConsoleSink<W> {
    fn on_fast_result(&mut self, result: &FastResult) {
        let text = if result.is_degraded() {
            result.text.yellow().to_string()
        } else {
            result.text.clone()
        };
        let _ = writeln!(
            self.out,
            "\n{}\n💭 {}",
            self.labels.fast_header.green().bold(),
            text
        );
        let _ = writeln!(self.out, "\n{}", self.labels.deep_header.blue().bold());
        let _ = self.out.flush();
    }

    fn on_chunk(&mut self, chunk: &str) {
        let _ = write!(self.out, "{}", chunk);
        let _ = self.out.flush();
    }

    fn on_turn_complete(&mut self, transcript: &TurnTranscript) {
        let timing = format!(
            "({:.2}s / {:.2}s)",
            transcript.fast.elapsed.as_secs_f64(),
            transcript.deep_elapsed.as_secs_f64()
        );
        let _ = writeln!(
            self.out,
            "\n\n{} {}\n{}",
            self.labels.done.green().bold(),
            timing.dimmed(),
            rule()
        );
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn rendered(sink: ConsoleSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_chunks_are_written_without_separators() {
        let mut sink = ConsoleSink::new(Vec::new(), Locale::English);
        sink.on_chunk("Hel");
        sink.on_chunk("lo, ");
        sink.on_chunk("world!");
        assert_eq!(rendered(sink), "Hello, world!");
    }

    #[test]
    fn test_fast_result_precedes_deep_header() {
        let mut sink = ConsoleSink::new(Vec::new(), Locale::English);
        sink.on_fast_result(&FastResult::answered("quick take", Duration::from_millis(300)));
        let output = rendered(sink);

        let fast = output.find("quick take").unwrap();
        let deep_header = output.find("[Detailed answer]").unwrap();
        assert!(fast < deep_header);
    }

    #[test]
    fn test_completion_line_reports_timings() {
        let mut sink = ConsoleSink::new(Vec::new(), Locale::Korean);
        let mut transcript =
            TurnTranscript::new(FastResult::answered("빠른 답", Duration::from_millis(500)));
        transcript.deep_elapsed = Duration::from_millis(2250);
        sink.on_turn_complete(&transcript);

        let output = rendered(sink);
        assert!(output.contains("응답 완료"));
        assert!(output.contains("0.50s / 2.25s"));
    }

    #[test]
    fn test_banner_shows_query() {
        let mut sink = ConsoleSink::new(Vec::new(), Locale::Korean);
        sink.begin_turn(&Query::new("람다란?"));
        let output = rendered(sink);
        assert!(output.contains("람다란?"));
        assert!(output.contains(&"=".repeat(RULE_WIDTH)));
    }
}
