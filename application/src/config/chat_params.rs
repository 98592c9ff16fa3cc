//! Chat parameters: static settings shared by every turn.
//!
//! [`ChatParams`] groups what the [`Orchestrator`](crate::use_cases::orchestrator::Orchestrator)
//! and [`ModelClient`](crate::client::ModelClient) need to run a turn.
//! They are read-only once a session starts.

use duet_domain::{Locale, ModelTier, TierSet};

/// Default capacity of the channel between the stream pump task and the consumer.
pub const DEFAULT_STREAM_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatParams {
    /// Fast and deep tier request parameters.
    pub tiers: TierSet,
    /// Language of prompts and fail-soft notices.
    pub locale: Locale,
    /// Bounded channel capacity for deep-tier fragments.
    pub stream_buffer: usize,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            tiers: TierSet::default(),
            locale: Locale::default(),
            stream_buffer: DEFAULT_STREAM_BUFFER,
        }
    }
}

impl ChatParams {
    // ==================== Builder Methods ====================

    pub fn with_tiers(mut self, tiers: TierSet) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity;
        self
    }

    pub fn tier(&self, tier: ModelTier) -> &duet_domain::TierConfig {
        self.tiers.get(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ChatParams::default();
        assert_eq!(params.locale, Locale::Korean);
        assert_eq!(params.stream_buffer, DEFAULT_STREAM_BUFFER);
        assert_eq!(params.tier(ModelTier::Fast).max_tokens, 100);
    }

    #[test]
    fn test_builders() {
        let params = ChatParams::default()
            .with_locale(Locale::English)
            .with_stream_buffer(4);
        assert_eq!(params.locale, Locale::English);
        assert_eq!(params.stream_buffer, 4);
    }
}
