//! Transport seams: the model endpoint and the message topic.

use async_trait::async_trait;

use crate::error::NotifyError;

/// A language-model endpoint that turns a prompt into text.
///
/// One call is one round-trip. Implementations do not retry.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Send the prompt and return the generated text.
    async fn summarize(&self, prompt: &str) -> Result<String, NotifyError>;

    /// Human-readable name of this summarizer.
    fn name(&self) -> &str;
}

/// A publish-and-forget message transport.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a serialized message to the destination.
    ///
    /// # Arguments
    /// * `destination` - Topic identifier (e.g. an SNS topic ARN)
    /// * `message` - Serialized notification body
    async fn publish(&self, destination: &str, message: &str) -> Result<(), NotifyError>;

    /// Human-readable name of this publisher.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: Publisher + ?Sized> Publisher for std::sync::Arc<T> {
    async fn publish(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        (**self).publish(destination, message).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
