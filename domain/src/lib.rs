//! Domain layer for nova-duet
//!
//! This crate contains the core types of a dual-tier chat turn.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tiers
//!
//! Every turn talks to two fixed model configurations:
//!
//! - **Fast**: small output budget, low temperature, answers in one round trip
//! - **Deep**: large output budget, higher temperature, streamed incrementally
//!
//! ## Turn
//!
//! A single query produces one [`FastResult`] (shown immediately) and one
//! chunk stream of [`StreamEvent`]-derived fragments (shown as they arrive).

pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    locale::Locale,
    query::Query,
    tier::{ModelTier, TierConfig, TierSet},
};
pub use orchestration::value_objects::{FastResult, PromptPair, TurnTranscript};
pub use prompt::PromptTemplate;
pub use session::stream::{ControlKind, StreamEvent};
