//! Error types for notifier operations.

use thiserror::Error;

/// Errors raised while binding an untyped mapping onto a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The payload was not a JSON object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// One or more required fields are absent.
    #[error("the following keys are missing: {}", .0.join(", "))]
    Missing(Vec<String>),

    /// Fields outside the schema were present under a strict policy.
    #[error("unexpected keys: {}", .0.join(", "))]
    Unexpected(Vec<String>),

    /// A field was present but had the wrong JSON shape.
    #[error("field `{field}` must be {expected}")]
    WrongShape {
        field: String,
        expected: &'static str,
    },

    /// The filtered fields could not be turned into the target record.
    #[error("record construction failed: {0}")]
    Construction(String),
}

impl BindError {
    /// Names of the missing fields, if this is a missing-field error.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::Missing(fields) => fields,
            _ => &[],
        }
    }
}

/// Errors that can occur while turning an event into a delivered notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The inbound event does not match the required shape.
    #[error("invalid source event: {0}")]
    Shape(#[from] BindError),

    /// An external endpoint call failed.
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// The model output broke the structured summary contract.
    #[error("summary contract violation: {0}")]
    ContractViolation(String),

    /// A message body was not text.
    #[error("invalid message body: {0}")]
    InvalidBody(String),

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotifyError {
    /// Build a transport error for the named service.
    pub fn transport(service: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            service,
            message: message.into(),
        }
    }
}
