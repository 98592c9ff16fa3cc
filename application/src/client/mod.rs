//! Remote model client.
//!
//! - [`ModelClient`] — tier-aware wrapper over a [`ModelTransport`](crate::ports::model_transport::ModelTransport)
//! - [`ChunkStream`] — pull-based, single-pass sequence of deep-tier fragments

mod chunk_stream;
mod model_client;

pub use chunk_stream::ChunkStream;
pub use model_client::ModelClient;
