//! Application-level configuration.
//!
//! - [`ChatParams`] — tier parameters, locale and stream buffering for a chat session

pub mod chat_params;

pub use chat_params::{ChatParams, DEFAULT_STREAM_BUFFER};
