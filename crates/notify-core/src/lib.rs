//! Core types and traits for the EventBridge chat notifier.
//!
//! This crate provides the shared vocabulary used by every other crate in
//! the workspace:
//!
//! - [`normalize_keys`] - snake_case normalization of raw event keys
//! - [`bind`] / [`Schema`] - bind-or-fail schema binding
//! - [`InboundEvent`] / [`SummaryContract`] - the bound records
//! - [`NotificationPayload`] - the outbound chat notification schema
//! - [`Summarizer`] / [`Publisher`] - the two external transports
//! - [`NotifyError`] - error types for the pipeline
//!
//! # Example
//!
//! ```rust
//! use notify_core::InboundEvent;
//! use serde_json::json;
//!
//! let event = InboundEvent::from_value(json!({
//!     "account": "111122223333",
//!     "region": "us-east-1",
//!     "source": "aws.ec2",
//!     "detail-type": "EC2 Instance State-change Notification",
//!     "detail": { "state": "running" },
//!     "resources": []
//! }))
//! .unwrap();
//!
//! assert_eq!(event.detail_type, "EC2 Instance State-change Notification");
//! ```

mod error;
mod event;
mod normalize;
mod notification;
mod schema;
mod summary;
mod trait_def;

pub use error::{BindError, NotifyError};
pub use event::InboundEvent;
pub use normalize::{normalize_key, normalize_keys};
pub use notification::{
    Notification, NotificationContent, NotificationMetadata, NotificationPayload,
    PlainNotification, Rendered, PAYLOAD_SOURCE, PAYLOAD_VERSION, TEXT_TYPE,
};
pub use schema::{bind, bind_value, ExcessPolicy, FieldShape, FieldSpec, Schema};
pub use summary::SummaryContract;
pub use trait_def::{Publisher, Summarizer};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
