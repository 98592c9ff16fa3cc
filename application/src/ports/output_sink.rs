//! Output sink port
//!
//! A sink renders one turn: the fast result in full, then each deep fragment
//! in arrival order, then a completion notice. The calls always arrive in
//! that order; see [`OrchestrationResult::render`](crate::use_cases::orchestrator::OrchestrationResult::render).

use duet_domain::{FastResult, TurnTranscript};

pub trait OutputSink: Send {
    /// Called exactly once, before any fragment.
    fn on_fast_result(&mut self, fast: &FastResult);

    /// Called for each non-empty deep fragment. Fragments concatenate with no separator.
    fn on_chunk(&mut self, chunk: &str);

    /// Called once the chunk stream is exhausted.
    fn on_turn_complete(&mut self, _transcript: &TurnTranscript) {}
}

/// Sink that discards everything. Useful when only the transcript matters.
pub struct NoOutput;

impl OutputSink for NoOutput {
    fn on_fast_result(&mut self, _fast: &FastResult) {}

    fn on_chunk(&mut self, _chunk: &str) {}
}
