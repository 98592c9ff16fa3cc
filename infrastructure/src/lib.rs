//! Infrastructure layer for nova-duet
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBedrockConfig, FileChatConfig, FileConfig,
    FileTierConfig, FileTiersConfig,
};
pub use providers::bedrock::{BedrockTransport, ConstructionError};
