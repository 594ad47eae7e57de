//! Delivery of assembled notifications to the configured destination.

use notify_core::{NotificationPayload, NotifyError, Publisher};
use tracing::info;

/// Serializes notifications and hands them to a publisher.
pub struct Dispatcher<P: Publisher> {
    publisher: P,
    destination: String,
}

impl<P: Publisher> Dispatcher<P> {
    /// Create a dispatcher that publishes to `destination`.
    pub fn new(publisher: P, destination: impl Into<String>) -> Self {
        Self {
            publisher,
            destination: destination.into(),
        }
    }

    /// The configured destination identifier.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The underlying publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Serialize the payload and publish it once.
    pub async fn dispatch(&self, payload: &NotificationPayload) -> Result<(), NotifyError> {
        let body = payload.to_json()?;

        info!(
            destination = %self.destination,
            publisher = self.publisher.name(),
            bytes = body.len(),
            "Dispatching notification"
        );

        self.publisher.publish(&self.destination, &body).await
    }
}
