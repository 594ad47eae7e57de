//! Broadcast utilities for the chat notifier.
//!
//! This crate provides [`Publisher`] implementations that deliver serialized
//! notifications to an Amazon SNS topic, which AWS Chatbot relays into chat.
//!
//! # Example
//!
//! ```no_run
//! use broadcaster::SnsBroadcaster;
//! use notify_core::Publisher;
//!
//! # async fn example() -> Result<(), notify_core::NotifyError> {
//! let broadcaster = SnsBroadcaster::from_env().await;
//!
//! broadcaster
//!     .publish("arn:aws:sns:us-east-1:111122223333:chatbot", "{\"version\":\"1.0\"}")
//!     .await?;
//! # Ok(())
//! # }
//! ```

use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client;
use notify_core::{async_trait, NotifyError, Publisher};
use tracing::info;

/// A publisher that sends messages to SNS topics.
#[derive(Clone)]
pub struct SnsBroadcaster {
    client: Client,
}

impl SnsBroadcaster {
    /// Create a broadcaster from the ambient AWS environment.
    pub async fn from_env() -> Self {
        let client = Client::new(&aws_config::load_from_env().await);
        info!("SNS broadcaster initialized");
        Self { client }
    }

    /// Create a broadcaster around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying SNS client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Publisher for SnsBroadcaster {
    async fn publish(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        let output = self
            .client
            .publish()
            .topic_arn(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| NotifyError::transport("sns", DisplayErrorContext(&e).to_string()))?;

        info!(
            topic_arn = %destination,
            message_id = output.message_id().unwrap_or("unknown"),
            "Published notification"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "SnsBroadcaster"
    }
}

/// A publisher for local runs that logs the message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LoggingPublisher;

#[async_trait]
impl Publisher for LoggingPublisher {
    async fn publish(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        info!("[dry-run] Publishing to {}: {}", destination, message);
        Ok(())
    }

    fn name(&self) -> &str {
        "LoggingPublisher"
    }
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
