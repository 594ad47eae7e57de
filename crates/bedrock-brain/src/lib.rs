//! Amazon Bedrock summarizer.
//!
//! This crate provides a [`Summarizer`] implementation that sends a prompt to
//! a Bedrock-hosted model (Amazon Nova Micro by default) and returns the
//! generated text.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bedrock_brain::BedrockBrain;
//! use notify_core::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = BedrockBrain::from_env().await?;
//!     let text = brain.summarize("Summarize: {}").await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::{build_request_body, extract_text, BedrockBrain};
pub use config::{BedrockBrainConfig, BedrockBrainConfigBuilder, DEFAULT_MODEL_ID, DEFAULT_REGION};

// Re-export core types for convenience
pub use notify_core::{async_trait, NotifyError, Summarizer};
