//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`] — the user's question for one turn
//! - [`tier::ModelTier`] / [`tier::TierConfig`] — the two fixed model configurations
//! - [`locale::Locale`] — language of prompts and fail-soft notices
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod locale;
pub mod query;
pub mod tier;
