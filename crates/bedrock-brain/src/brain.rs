//! BedrockBrain implementation using the Bedrock Runtime `InvokeModel` API.

use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use notify_core::{async_trait, NotifyError, PlainNotification, Summarizer};
use tracing::{debug, info};

use crate::api_types::{InvokeBody, InvokeResponse, NovaMessage};
use crate::config::BedrockBrainConfig;

const SERVICE: &str = "bedrock";

/// A summarizer backed by a Bedrock-hosted model.
///
/// Each call is a single `InvokeModel` round-trip carrying one user message.
/// No retry and no streaming; SDK defaults apply to timeouts.
pub struct BedrockBrain {
    client: Client,
    config: BedrockBrainConfig,
}

impl BedrockBrain {
    /// Create a new BedrockBrain, loading AWS credentials from the environment.
    pub async fn new(config: BedrockBrainConfig) -> Self {
        let sdk_config = aws_config::from_env()
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        Self::with_client(Client::new(&sdk_config), config)
    }

    /// Create a BedrockBrain around an existing client.
    pub fn with_client(client: Client, config: BedrockBrainConfig) -> Self {
        info!(
            "BedrockBrain initialized with model: {}, region: {}",
            config.model_id, config.region
        );
        Self { client, config }
    }

    /// Create a BedrockBrain from environment variables.
    ///
    /// See [`BedrockBrainConfig::from_env`] for the recognised variables.
    pub async fn from_env() -> Result<Self, NotifyError> {
        let config = BedrockBrainConfig::from_env()?;
        Ok(Self::new(config).await)
    }

    /// Get the configuration.
    pub fn config(&self) -> &BedrockBrainConfig {
        &self.config
    }
}

/// Build the JSON request body carrying the prompt as one user message.
pub fn build_request_body(prompt: &str) -> Result<Vec<u8>, NotifyError> {
    let body = InvokeBody {
        messages: vec![NovaMessage::user(prompt)],
    };
    Ok(serde_json::to_vec(&body)?)
}

/// Pull the generated text out of a decoded response body.
pub fn extract_text(body: &[u8]) -> Result<String, NotifyError> {
    let response: InvokeResponse = serde_json::from_slice(body).map_err(|e| {
        NotifyError::transport(SERVICE, format!("Failed to parse response: {}", e))
    })?;

    if let Some(usage) = &response.usage {
        debug!(
            "Token usage - input: {}, output: {}, total: {}",
            usage.input_tokens, usage.output_tokens, usage.total_tokens
        );
    }

    let text = response
        .output
        .message
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .ok_or_else(|| NotifyError::transport(SERVICE, "response contained no text block"))?;

    let mut notification = PlainNotification::default();
    notification.set_text_value(&text)?;
    Ok(notification.text().to_string())
}

#[async_trait]
impl Summarizer for BedrockBrain {
    async fn summarize(&self, prompt: &str) -> Result<String, NotifyError> {
        let body = build_request_body(prompt)?;

        debug!(
            model_id = %self.config.model_id,
            bytes = body.len(),
            "Invoking Bedrock model"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&self.config.model_id)
            .accept(&self.config.accept)
            .content_type(&self.config.content_type)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| NotifyError::transport(SERVICE, DisplayErrorContext(&e).to_string()))?;

        let text = extract_text(output.body().as_ref())?;
        debug!("Received model response: {}", text);

        Ok(text)
    }

    fn name(&self) -> &str {
        "BedrockBrain"
    }
}
