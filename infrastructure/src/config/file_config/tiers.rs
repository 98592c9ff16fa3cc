//! Tier overrides from TOML (`[tiers.fast]` / `[tiers.deep]` sections)
//!
//! # Example
//!
//! ```toml
//! [tiers.fast]
//! model_id = "amazon.nova-lite-v1:0"
//! max_tokens = 150
//!
//! [tiers.deep]
//! temperature = 0.7
//! ```
//!
//! Unset fields keep the tier's built-in default.

use super::ConfigValidationError;
use duet_domain::{ModelTier, TierConfig, TierSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTierConfig {
    pub model_id: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl FileTierConfig {
    /// Overlay the set fields on `defaults`.
    pub fn to_tier_config(&self, defaults: TierConfig) -> TierConfig {
        TierConfig {
            model_id: self.model_id.clone().unwrap_or(defaults.model_id),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTiersConfig {
    pub fast: FileTierConfig,
    pub deep: FileTierConfig,
}

impl FileTiersConfig {
    fn resolve(&self, tier: ModelTier) -> TierConfig {
        let overrides = match tier {
            ModelTier::Fast => &self.fast,
            ModelTier::Deep => &self.deep,
        };
        overrides.to_tier_config(TierConfig::default_for(tier))
    }

    pub fn to_tier_set(&self) -> Result<TierSet, ConfigValidationError> {
        let fast = self.resolve(ModelTier::Fast);
        fast.validate(ModelTier::Fast)?;
        let deep = self.resolve(ModelTier::Deep);
        deep.validate(ModelTier::Deep)?;
        Ok(TierSet { fast, deep })
    }

    pub fn issues(&self) -> Vec<ConfigValidationError> {
        [ModelTier::Fast, ModelTier::Deep]
            .into_iter()
            .filter_map(|tier| self.resolve(tier).validate(tier).err())
            .map(ConfigValidationError::from)
            .collect()
    }
}
