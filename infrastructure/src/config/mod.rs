//! Configuration file loading for nova-duet
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NOVA_DUET_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./nova-duet.toml` or `./.nova-duet.toml`
//! 4. Global: `$XDG_CONFIG_HOME/nova-duet/config.toml` (or `~/.config/nova-duet/config.toml`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBedrockConfig, FileChatConfig, FileConfig, FileTierConfig,
    FileTiersConfig,
};
pub use loader::ConfigLoader;
