//! Pipeline configuration: rendering strategy and destination.

use std::fmt;
use std::str::FromStr;

use notify_core::NotifyError;

/// Which instruction template, and therefore which response contract, to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    /// Free-text Slack paragraph with a sentiment-tagged title line.
    #[default]
    Narrative,
    /// Short free-text sentences with a sentiment emoji.
    Brief,
    /// A six-field JSON object that is validated before delivery.
    Structured,
}

impl SummaryStyle {
    /// Configuration name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Narrative => "narrative",
            Self::Brief => "brief",
            Self::Structured => "structured",
        }
    }

    /// Whether the model's answer must satisfy the structured contract.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured)
    }
}

impl FromStr for SummaryStyle {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "narrative" => Ok(Self::Narrative),
            "brief" => Ok(Self::Brief),
            "structured" | "json" => Ok(Self::Structured),
            other => Err(NotifyError::Configuration(format!(
                "unknown summary style: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the notification body is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Deterministic template; no model call.
    Template,
    /// Model-generated summary in the given style.
    Ai(SummaryStyle),
}

impl RenderMode {
    /// Pick the mode from an AI on/off flag and a style.
    pub fn from_flag(use_ai: bool, style: SummaryStyle) -> Self {
        if use_ai {
            Self::Ai(style)
        } else {
            Self::Template
        }
    }

    /// Whether this mode calls the model.
    pub fn uses_ai(&self) -> bool {
        matches!(self, Self::Ai(_))
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::Ai(SummaryStyle::default())
    }
}

/// Configuration handed to the pipeline constructor.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Destination identifier for the publisher (an SNS topic ARN).
    pub destination: String,

    /// Rendering strategy.
    pub mode: RenderMode,
}

impl PipelineConfig {
    /// Create a configuration for the given destination and mode.
    pub fn new(destination: impl Into<String>, mode: RenderMode) -> Self {
        Self {
            destination: destination.into(),
            mode,
        }
    }

    /// Deterministic rendering to the given destination.
    pub fn template(destination: impl Into<String>) -> Self {
        Self::new(destination, RenderMode::Template)
    }

    /// AI rendering in the given style to the given destination.
    pub fn ai(destination: impl Into<String>, style: SummaryStyle) -> Self {
        Self::new(destination, RenderMode::Ai(style))
    }
}
