//! Streaming session domain.
//!
//! - [`stream::StreamEvent`] — a decoded event from the deep-tier stream

pub mod stream;
