//! Event-to-notification pipeline for AWS chat channels.
//!
//! This crate provides the [`Pipeline`] type which turns a raw EventBridge
//! event into a chat notification and publishes it.
//!
//! # Architecture
//!
//! ```text
//! EventBridge event (raw JSON)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         PIPELINE                            │
//! │                                                             │
//! │  1. Normalize keys and bind to InboundEvent                 │
//! │         ↓                                                   │
//! │  2. Render, depending on mode:                              │
//! │     • template → fixed Slack-markdown layout                │
//! │     • ai       → build prompt, summarize, check contract    │
//! │         ↓                                                   │
//! │  3. Assemble the chat notification payload                  │
//! │         ↓                                                   │
//! │  4. Dispatch to the configured destination                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use orchestrator::{Pipeline, PipelineConfig};
//! use broadcaster::SnsBroadcaster;
//!
//! let publisher = SnsBroadcaster::from_env().await;
//! let pipeline = Pipeline::new(PipelineConfig::template(topic_arn), publisher);
//!
//! pipeline.run(event).await?;
//! ```

pub mod assembler;
pub mod config;
pub mod contract;
pub mod dispatcher;
pub mod pipeline;
pub mod prompt;
pub mod template;

pub use assembler::assemble;
pub use config::{PipelineConfig, RenderMode, SummaryStyle};
pub use contract::{parse_response, parse_summary};
pub use dispatcher::Dispatcher;
pub use pipeline::Pipeline;
pub use prompt::{build_prompt, template_for, EVENT_PLACEHOLDER};
pub use template::render_event;

// Re-export core types for convenience
pub use notify_core::{InboundEvent, NotificationPayload, NotifyError, Publisher, Rendered, Summarizer};
