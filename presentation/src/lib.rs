//! Presentation layer for nova-duet
//!
//! This crate contains CLI definitions, the console output sink,
//! the progress spinner, and the interactive and batch session drivers.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{BatchRunner, ChatRepl, run_turn};
pub use cli::commands::{Cli, RunMode};
pub use output::console::ConsoleSink;
pub use progress::spinner::FastSpinner;
