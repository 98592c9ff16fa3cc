//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and resolved into domain/application types.

mod bedrock;
mod chat;
mod tiers;

pub use bedrock::FileBedrockConfig;
pub use chat::FileChatConfig;
pub use tiers::{FileTierConfig, FileTiersConfig};

use duet_application::ChatParams;
use duet_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("bedrock.region cannot be empty")]
    EmptyRegion,

    #[error("bedrock.{field} cannot be 0")]
    ZeroTimeout { field: &'static str },

    #[error("bedrock.max_attempts cannot be 0")]
    ZeroAttempts,

    #[error("chat.stream_buffer cannot be 0")]
    ZeroStreamBuffer,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// AWS client settings
    pub bedrock: FileBedrockConfig,
    /// Per-tier model overrides
    pub tiers: FileTiersConfig,
    /// Locale and session settings
    pub chat: FileChatConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.bedrock.issues();
        issues.extend(self.tiers.issues());
        issues.extend(self.chat.issues());
        issues
    }

    /// Resolve the settings every turn shares.
    pub fn chat_params(&self) -> Result<ChatParams, ConfigValidationError> {
        let tiers = self.tiers.to_tier_set()?;
        let locale = self.chat.locale()?;
        if self.chat.stream_buffer == 0 {
            return Err(ConfigValidationError::ZeroStreamBuffer);
        }

        Ok(ChatParams::default()
            .with_tiers(tiers)
            .with_locale(locale)
            .with_stream_buffer(self.chat.stream_buffer))
    }
}
