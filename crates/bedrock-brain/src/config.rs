//! Configuration for BedrockBrain.

use notify_core::NotifyError;
use std::env;

/// Default model: Amazon Nova Micro.
pub const DEFAULT_MODEL_ID: &str = "amazon.nova-micro-v1:0";

/// Default region for the Bedrock runtime endpoint.
pub const DEFAULT_REGION: &str = "us-east-1";

const JSON_MIME: &str = "application/json";

/// Configuration for BedrockBrain.
#[derive(Debug, Clone)]
pub struct BedrockBrainConfig {
    /// Bedrock model identifier.
    pub model_id: String,

    /// AWS region hosting the model.
    pub region: String,

    /// Accept header for the invocation.
    pub accept: String,

    /// Content type of the request body.
    pub content_type: String,
}

impl Default for BedrockBrainConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
            accept: JSON_MIME.to_string(),
            content_type: JSON_MIME.to_string(),
        }
    }
}

impl BedrockBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BEDROCK_MODEL_ID` - Model identifier (default: amazon.nova-micro-v1:0)
    /// - `BEDROCK_REGION` - Region of the runtime endpoint (default: us-east-1)
    pub fn from_env() -> Result<Self, NotifyError> {
        let model_id =
            env::var("BEDROCK_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        if model_id.trim().is_empty() {
            return Err(NotifyError::Configuration(
                "BEDROCK_MODEL_ID is empty".to_string(),
            ));
        }

        let region = env::var("BEDROCK_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Ok(Self {
            model_id,
            region,
            ..Self::default()
        })
    }

    /// Create a new config builder.
    pub fn builder() -> BedrockBrainConfigBuilder {
        BedrockBrainConfigBuilder::default()
    }
}

/// Builder for BedrockBrainConfig.
#[derive(Debug, Default)]
pub struct BedrockBrainConfigBuilder {
    config: BedrockBrainConfig,
}

impl BedrockBrainConfigBuilder {
    /// Set the model identifier.
    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.config.model_id = model_id.into();
        self
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Set the accept header.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.config.accept = accept.into();
        self
    }

    /// Set the request content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.config.content_type = content_type.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BedrockBrainConfig {
        self.config
    }
}
