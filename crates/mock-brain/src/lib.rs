//! Mock transports for notifier pipeline tests.
//!
//! This crate provides test doubles for the two external collaborators:
//! - `EchoSummarizer` - Returns the prompt it was given
//! - `FixedSummarizer` - Returns canned text and records prompts
//! - `FailingSummarizer` - Always fails with a transport error
//! - `RecordingPublisher` - Keeps published messages in memory
//! - `FailingPublisher` - Always fails with a transport error
//!
//! For production use, see `bedrock-brain` and `broadcaster`.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{FixedSummarizer, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::NotifyError> {
//!     let summarizer = FixedSummarizer::new("All good");
//!
//!     let response = summarizer.summarize("Summarize this event").await?;
//!     println!("Response: {}", response);
//!     Ok(())
//! }
//! ```

mod echo;
mod recording;
mod scripted;

// Re-export core types for convenience
pub use notify_core::{async_trait, NotifyError, Publisher, Summarizer};

pub use echo::EchoSummarizer;
pub use recording::{FailingPublisher, PublishedMessage, RecordingPublisher};
pub use scripted::{FailingSummarizer, FixedSummarizer};
