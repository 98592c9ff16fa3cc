//! AWS client configuration from TOML (`[bedrock]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region (default: the AWS provider chain, then "us-east-1")
    pub region: Option<String>,
    /// AWS profile name for credentials
    pub profile: Option<String>,
    /// Route requests through a cross-region inference profile
    pub cross_region: bool,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds: time to the first response byte, and the
    /// longest wait between two events of a deep-tier stream
    pub read_timeout_secs: u64,
    /// Total attempts per request, including the first
    pub max_attempts: u32,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            cross_region: false,
            connect_timeout_secs: 10,
            read_timeout_secs: 60,
            max_attempts: 3,
        }
    }
}

impl FileBedrockConfig {
    pub fn issues(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if matches!(self.region.as_deref(), Some(r) if r.trim().is_empty()) {
            issues.push(ConfigValidationError::EmptyRegion);
        }
        if self.connect_timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout {
                field: "connect_timeout_secs",
            });
        }
        if self.read_timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout {
                field: "read_timeout_secs",
            });
        }
        if self.max_attempts == 0 {
            issues.push(ConfigValidationError::ZeroAttempts);
        }

        issues
    }

    /// First issue found, if any.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}
