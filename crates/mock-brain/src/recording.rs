//! Publishers that record or refuse messages instead of sending them.

use std::sync::Mutex;

use notify_core::{async_trait, NotifyError, Publisher};

/// A message captured by [`RecordingPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub destination: String,
    pub message: String,
}

/// A publisher that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    sent: Mutex<Vec<PublishedMessage>>,
}

impl RecordingPublisher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages published so far, oldest first.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of publish calls made so far.
    pub fn publish_count(&self) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(PublishedMessage {
                destination: destination.to_string(),
                message: message.to_string(),
            });
        Ok(())
    }

    fn name(&self) -> &str {
        "RecordingPublisher"
    }
}

/// A publisher whose topic always rejects the message.
#[derive(Debug, Clone, Default)]
pub struct FailingPublisher;

#[async_trait]
impl Publisher for FailingPublisher {
    async fn publish(&self, destination: &str, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::transport(
            "sns",
            format!("topic {} rejected the message", destination),
        ))
    }

    fn name(&self) -> &str {
        "FailingPublisher"
    }
}
