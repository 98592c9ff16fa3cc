//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid {tier} tier configuration: {reason}")]
    InvalidTierConfig { tier: String, reason: String },
}
