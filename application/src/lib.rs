//! Application layer for nova-duet
//!
//! This crate contains the orchestrator use case, the remote model client,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod client;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use client::{ChunkStream, ModelClient};
pub use config::ChatParams;
pub use ports::{
    model_transport::{EventStream, ModelTransport, TransportError},
    output_sink::{NoOutput, OutputSink},
};
pub use use_cases::orchestrator::{OrchestrationResult, Orchestrator};
