//! Inference transport adapters.
//!
//! Each adapter implements the
//! [`ModelTransport`](duet_application::ports::model_transport::ModelTransport) port.

pub mod bedrock;
