//! Scripted summarizers - canned responses and canned failures.

use std::sync::Mutex;

use notify_core::{async_trait, NotifyError, Summarizer};

/// A summarizer that always returns the same text and remembers every prompt.
#[derive(Debug, Default)]
pub struct FixedSummarizer {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl FixedSummarizer {
    /// Create a summarizer that answers every prompt with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, NotifyError> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(prompt.to_string());
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "FixedSummarizer"
    }
}

/// A summarizer whose endpoint is always down.
#[derive(Debug, Clone)]
pub struct FailingSummarizer {
    message: String,
}

impl FailingSummarizer {
    /// Create a summarizer that fails with the given transport message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingSummarizer {
    fn default() -> Self {
        Self::new("endpoint unavailable")
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _prompt: &str) -> Result<String, NotifyError> {
        Err(NotifyError::transport("bedrock", self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingSummarizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_records_prompts() {
        let summarizer = FixedSummarizer::new("canned");

        assert_eq!(summarizer.summarize("one").await.unwrap(), "canned");
        assert_eq!(summarizer.summarize("two").await.unwrap(), "canned");
        assert_eq!(summarizer.prompts(), vec!["one", "two"]);
        assert_eq!(summarizer.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_returns_transport_error() {
        let err = FailingSummarizer::new("throttled")
            .summarize("x")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "bedrock request failed: throttled");
    }
}
