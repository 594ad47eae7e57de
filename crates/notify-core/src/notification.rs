//! Chatbot notification shapes and the outbound payload schema.

use serde::Serialize;

use crate::error::NotifyError;
use crate::summary::SummaryContract;

/// Schema version expected by the chat consumer.
pub const PAYLOAD_VERSION: &str = "1.0";

/// Source marker for custom notifications.
pub const PAYLOAD_SOURCE: &str = "custom";

/// Markdown flavour of the description text.
pub const TEXT_TYPE: &str = "client-markdown";

/// Something that can be rendered into notification body text.
pub trait Notification {
    /// The description text shown in the chat message.
    fn render(&self) -> String;
}

/// A notification that is only a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainNotification {
    text: String,
}

impl PlainNotification {
    /// Create a notification with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text of the notification.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text with a new value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the text from an untyped value; anything but a string is rejected.
    pub fn set_text_value(&mut self, value: &serde_json::Value) -> Result<(), NotifyError> {
        match value.as_str() {
            Some(text) => {
                self.text = text.to_string();
                Ok(())
            }
            None => Err(NotifyError::InvalidBody(
                "notification text must be a string".to_string(),
            )),
        }
    }
}

impl Notification for PlainNotification {
    fn render(&self) -> String {
        self.text.clone()
    }
}

impl Notification for SummaryContract {
    fn render(&self) -> String {
        self.description.clone()
    }
}

/// Result of the rendering stage, before it is shaped into a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Template output or free-form model text.
    Plain(PlainNotification),
    /// A validated structured model summary.
    Structured(SummaryContract),
}

impl Rendered {
    /// Convenience constructor for plain text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(PlainNotification::new(text))
    }
}

impl Notification for Rendered {
    fn render(&self) -> String {
        match self {
            Self::Plain(notification) => notification.render(),
            Self::Structured(summary) => summary.render(),
        }
    }
}

/// The `content` block of a chat notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    pub description: String,
    pub text_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
}

/// The `metadata` block of a structured chat notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    pub thread_id: String,
    pub summary: String,
}

/// The complete message published to the chat topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub content: NotificationContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NotificationMetadata>,
    pub version: &'static str,
    pub source: &'static str,
}

impl NotificationPayload {
    /// Serialize to the JSON string sent over the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_text_value_rejects_non_text() {
        let mut notification = PlainNotification::new("before");

        let err = notification.set_text_value(&json!({ "text": 1 })).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidBody(_)));
        assert_eq!(notification.text(), "before");

        notification.set_text_value(&json!("after")).unwrap();
        assert_eq!(notification.text(), "after");
    }

    #[test]
    fn test_render_uses_description_for_summaries() {
        let summary = SummaryContract {
            title: "t".to_string(),
            description: "body".to_string(),
            keywords: vec![],
            thread_id: "id".to_string(),
            next_steps: vec![],
            summary: "s".to_string(),
        };
        assert_eq!(Rendered::Structured(summary).render(), "body");
        assert_eq!(Rendered::plain("hello").render(), "hello");
    }

    #[test]
    fn test_payload_omits_absent_blocks() {
        let payload = NotificationPayload {
            content: NotificationContent {
                description: "hi".to_string(),
                text_type: TEXT_TYPE,
                title: None,
                keywords: None,
                next_steps: None,
            },
            metadata: None,
            version: PAYLOAD_VERSION,
            source: PAYLOAD_SOURCE,
        };

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"content":{"description":"hi","textType":"client-markdown"},"version":"1.0","source":"custom"}"#
        );
    }
}
