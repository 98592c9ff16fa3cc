//! Value objects for a single chat turn

use std::time::Duration;

/// The two prompts derived from one query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub fast_prompt: String,
    pub deep_prompt: String,
}

impl PromptPair {
    pub fn new(fast_prompt: impl Into<String>, deep_prompt: impl Into<String>) -> Self {
        Self {
            fast_prompt: fast_prompt.into(),
            deep_prompt: deep_prompt.into(),
        }
    }
}

/// Terminal value of the fast-tier call.
///
/// When the call fails the text is a localized degraded-service message and
/// `degraded` is set; callers never see the underlying error.
#[derive(Debug, Clone, PartialEq)]
pub struct FastResult {
    pub text: String,
    pub degraded: bool,
    pub elapsed: Duration,
}

impl FastResult {
    pub fn answered(text: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            text: text.into(),
            degraded: false,
            elapsed,
        }
    }

    pub fn degraded(message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            text: message.into(),
            degraded: true,
            elapsed,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// What was shown to a sink for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnTranscript {
    pub fast: FastResult,
    /// Deep fragments concatenated in arrival order, no separators.
    pub deep_text: String,
    pub fragments: usize,
    /// Time from the start of rendering until the stream was exhausted.
    pub deep_elapsed: Duration,
}

impl TurnTranscript {
    pub fn new(fast: FastResult) -> Self {
        Self {
            fast,
            deep_text: String::new(),
            fragments: 0,
            deep_elapsed: Duration::ZERO,
        }
    }

    pub fn push_fragment(&mut self, fragment: &str) {
        self.deep_text.push_str(fragment);
        self.fragments += 1;
    }
}
