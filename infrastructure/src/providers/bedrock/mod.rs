//! AWS Bedrock provider for the Amazon Nova model family
//!
//! Sends Nova native request bodies through `InvokeModel` (fast tier) and
//! `InvokeModelWithResponseStream` (deep tier), authenticating through the
//! AWS default credential chain.

mod adapter;
mod model_map;
mod stream;
mod types;

pub use adapter::{BedrockTransport, ConstructionError};
