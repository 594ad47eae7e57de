//! Mapping of rendered output onto the chat notification schema.

use notify_core::{
    Notification, NotificationContent, NotificationMetadata, NotificationPayload, Rendered,
    PAYLOAD_SOURCE, PAYLOAD_VERSION, TEXT_TYPE,
};

/// Build the outbound payload for a rendered notification.
pub fn assemble(rendered: Rendered) -> NotificationPayload {
    let description = rendered.render();

    let (content, metadata) = match rendered {
        Rendered::Plain(_) => (
            NotificationContent {
                description,
                text_type: TEXT_TYPE,
                title: None,
                keywords: None,
                next_steps: None,
            },
            None,
        ),
        Rendered::Structured(summary) => (
            NotificationContent {
                description,
                text_type: TEXT_TYPE,
                title: Some(summary.title),
                keywords: Some(summary.keywords),
                next_steps: Some(summary.next_steps),
            },
            Some(NotificationMetadata {
                thread_id: summary.thread_id,
                summary: summary.summary,
            }),
        ),
    };

    NotificationPayload {
        content,
        metadata,
        version: PAYLOAD_VERSION,
        source: PAYLOAD_SOURCE,
    }
}
