//! Echo summarizer - returns the prompt it was given.

use notify_core::{async_trait, NotifyError, Summarizer};

/// A summarizer that echoes the prompt back as its response.
///
/// Useful for checking what the pipeline sends to the model without any AI
/// processing.
#[derive(Debug, Clone, Default)]
pub struct EchoSummarizer {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoSummarizer {
    /// Create a new EchoSummarizer with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoSummarizer with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::EchoSummarizer;
    ///
    /// let summarizer = EchoSummarizer::with_prefix("Echo: ");
    /// // Will respond with "Echo: <prompt>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Summarizer for EchoSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, NotifyError> {
        Ok(match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, prompt),
            None => prompt.to_string(),
        })
    }

    fn name(&self) -> &str {
        "EchoSummarizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let summarizer = EchoSummarizer::new();
        let response = summarizer.summarize("Hello!").await.unwrap();
        assert_eq!(response, "Hello!");
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let summarizer = EchoSummarizer::with_prefix("Echo: ");
        let response = summarizer.summarize("Hello!").await.unwrap();
        assert_eq!(response, "Echo: Hello!");
    }

    #[tokio::test]
    async fn test_summarizer_name() {
        assert_eq!(EchoSummarizer::new().name(), "EchoSummarizer");
    }
}
