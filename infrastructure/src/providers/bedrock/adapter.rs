//! Bedrock transport adapter
//!
//! Implements `ModelTransport` for the orchestrator.
//! Handles AWS client initialization and the two request shapes.

use super::stream::timed_event_stream;
use super::{model_map, types};
use crate::config::FileBedrockConfig;
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_smithy_types::Blob;
use duet_application::ports::model_transport::{EventStream, ModelTransport, TransportError};
use duet_domain::TierConfig;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const FALLBACK_REGION: &str = "us-east-1";
const JSON: &str = "application/json";

/// The Bedrock client could not be built. Fatal: no turn can run without it.
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("Invalid Bedrock configuration: {0}")]
    InvalidConfig(String),
}

pub struct BedrockTransport {
    client: Arc<BedrockClient>,
    region: String,
    cross_region: bool,
    read_timeout: Duration,
}

impl BedrockTransport {
    /// Create a new Bedrock transport.
    ///
    /// Resolves the region (config, then the AWS default chain, then
    /// `us-east-1`) and applies the connect/read timeouts and retry budget
    /// to every request either tier makes. Each attempt is also capped at
    /// connect + read timeout, which bounds the fast tier's body read; the
    /// deep tier bounds every stream read separately.
    pub async fn new(config: &FileBedrockConfig) -> Result<Self, ConstructionError> {
        config
            .validate()
            .map_err(|e| ConstructionError::InvalidConfig(e.to_string()))?;

        let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION));

        let connect_timeout = Duration::from_secs(config.connect_timeout_secs);
        let read_timeout = Duration::from_secs(config.read_timeout_secs);
        let timeouts = TimeoutConfig::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .operation_attempt_timeout(connect_timeout + read_timeout)
            .build();
        let retries = RetryConfig::standard().with_max_attempts(config.max_attempts);

        let mut aws_config_loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .timeout_config(timeouts)
            .retry_config(retries);

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        let region = aws_config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| FALLBACK_REGION.to_string());
        let client = BedrockClient::new(&aws_config);

        info!(
            region = %region,
            cross_region = config.cross_region,
            "Bedrock transport initialized"
        );

        Ok(Self {
            client: Arc::new(client),
            region,
            cross_region: config.cross_region,
            read_timeout,
        })
    }

    fn model_id(&self, tier: &TierConfig) -> String {
        model_map::to_bedrock_model_id(&tier.model_id, self.cross_region, &self.region)
    }
}

#[async_trait]
impl ModelTransport for BedrockTransport {
    fn name(&self) -> &str {
        "bedrock"
    }

    async fn invoke(&self, tier: &TierConfig, prompt: &str) -> Result<String, TransportError> {
        let model_id = self.model_id(tier);
        let body = types::encode_request(prompt, tier)?;

        debug!(model = %model_id, prompt_chars = prompt.chars().count(), "Calling Bedrock InvokeModel");

        let response = self
            .client
            .invoke_model()
            .model_id(&model_id)
            .content_type(JSON)
            .accept(JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| types::convert_sdk_error(&e))?;

        types::decode_response(response.body().as_ref())
    }

    async fn open_stream(
        &self,
        tier: &TierConfig,
        prompt: &str,
    ) -> Result<EventStream, TransportError> {
        let model_id = self.model_id(tier);
        let body = types::encode_request(prompt, tier)?;

        debug!(
            model = %model_id,
            prompt_chars = prompt.chars().count(),
            "Calling Bedrock InvokeModelWithResponseStream"
        );

        let output = self
            .client
            .invoke_model_with_response_stream()
            .model_id(&model_id)
            .content_type(JSON)
            .accept(JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| types::convert_sdk_error(&e))?;

        Ok(timed_event_stream(output.body, self.read_timeout))
    }
}
