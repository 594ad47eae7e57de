//! Bedrock Nova request and response types.

use serde::{Deserialize, Serialize};

/// A text content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

/// A conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovaMessage {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Content blocks
    pub content: Vec<TextBlock>,
}

impl NovaMessage {
    /// Create a user message with a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![TextBlock { text: text.into() }],
        }
    }
}

/// Body of an `InvokeModel` request.
#[derive(Debug, Clone, Serialize)]
pub struct InvokeBody {
    pub messages: Vec<NovaMessage>,
}

/// Body of an `InvokeModel` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    pub output: ResponseOutput,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Output wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseOutput {
    pub message: ResponseMessage,
}

/// Generated message.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    pub content: Vec<ResponseBlock>,
}

/// A generated content block. The text is kept untyped so a non-string
/// value can be reported instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBlock {
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}
