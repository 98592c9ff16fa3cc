//! Session configuration from TOML (`[chat]` section)

use super::ConfigValidationError;
use duet_application::config::DEFAULT_STREAM_BUFFER;
use duet_domain::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Prompt and notice language ("ko" or "en")
    pub locale: String,
    /// Capacity of the deep-tier fragment channel
    pub stream_buffer: usize,
    /// Wait for Enter between batch queries
    pub pause_between_batch: bool,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().as_str().to_string(),
            stream_buffer: DEFAULT_STREAM_BUFFER,
            pause_between_batch: true,
        }
    }
}

impl FileChatConfig {
    pub fn locale(&self) -> Result<Locale, ConfigValidationError> {
        Ok(self.locale.parse()?)
    }

    pub fn issues(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if let Err(e) = self.locale() {
            issues.push(e);
        }
        if self.stream_buffer == 0 {
            issues.push(ConfigValidationError::ZeroStreamBuffer);
        }
        issues
    }
}
