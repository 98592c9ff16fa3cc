//! Model tier value objects

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the two fixed model configurations used in every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    /// Low-latency, low-detail model answered in a single round trip.
    Fast,
    /// Slower, high-detail model streamed incrementally.
    Deep,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Fast => "fast",
            ModelTier::Deep => "deep",
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request parameters for one tier: model identifier, output budget, sampling temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl TierConfig {
    pub const FAST_MODEL_ID: &'static str = "amazon.nova-micro-v1:0";
    pub const DEEP_MODEL_ID: &'static str = "amazon.nova-pro-v1:0";

    pub fn new(model_id: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model_id: model_id.into(),
            max_tokens,
            temperature,
        }
    }

    /// Nova Micro, 100 tokens, temperature 0.3
    pub fn fast_default() -> Self {
        Self::new(Self::FAST_MODEL_ID, 100, 0.3)
    }

    /// Nova Pro, 2048 tokens, temperature 0.5
    pub fn deep_default() -> Self {
        Self::new(Self::DEEP_MODEL_ID, 2048, 0.5)
    }

    pub fn default_for(tier: ModelTier) -> Self {
        match tier {
            ModelTier::Fast => Self::fast_default(),
            ModelTier::Deep => Self::deep_default(),
        }
    }

    /// Check the parameters are something the transport can accept.
    pub fn validate(&self, tier: ModelTier) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidTierConfig {
            tier: tier.to_string(),
            reason: reason.to_string(),
        };

        if self.model_id.trim().is_empty() {
            return Err(invalid("model_id must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(invalid("max_tokens must be positive"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(invalid("temperature must be within 0.0..=1.0"));
        }
        Ok(())
    }
}

/// The fast and deep configurations used together by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSet {
    pub fast: TierConfig,
    pub deep: TierConfig,
}

impl TierSet {
    pub fn get(&self, tier: ModelTier) -> &TierConfig {
        match tier {
            ModelTier::Fast => &self.fast,
            ModelTier::Deep => &self.deep,
        }
    }
}

impl Default for TierSet {
    fn default() -> Self {
        Self {
            fast: TierConfig::fast_default(),
            deep: TierConfig::deep_default(),
        }
    }
}
