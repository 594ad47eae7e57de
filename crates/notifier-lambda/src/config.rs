//! Runtime configuration read from the Lambda environment.

use std::env;

use notify_core::NotifyError;
use orchestrator::{PipelineConfig, RenderMode, SummaryStyle};

/// Settings for one deployed notifier function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// SNS topic the notifications are published to.
    pub topic_arn: String,

    /// Whether notifications are summarized by the model.
    pub use_ai: bool,

    /// Summary style used when `use_ai` is set.
    pub style: SummaryStyle,

    /// Log notifications instead of publishing them.
    pub dry_run: bool,
}

impl NotifierConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TOPIC_ARN` - Destination SNS topic
    ///
    /// Optional environment variables:
    /// - `USE_AI` - Summarize with the model (default: True)
    /// - `SUMMARY_STYLE` - narrative, brief or structured (default: narrative)
    /// - `DRY_RUN` - Log instead of publishing (default: false)
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let topic_arn = lookup("TOPIC_ARN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| NotifyError::Configuration("TOPIC_ARN not set".to_string()))?;

        let use_ai = lookup("USE_AI").map(|v| parse_flag(&v)).unwrap_or(true);

        let style = match lookup("SUMMARY_STYLE") {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => SummaryStyle::default(),
        };

        let dry_run = lookup("DRY_RUN").map(|v| parse_flag(&v)).unwrap_or(false);

        Ok(Self {
            topic_arn,
            use_ai,
            style,
            dry_run,
        })
    }

    /// The rendering strategy selected by this configuration.
    pub fn mode(&self) -> RenderMode {
        RenderMode::from_flag(self.use_ai, self.style)
    }

    /// Configuration for the pipeline constructor.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(self.topic_arn.clone(), self.mode())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1")
}
