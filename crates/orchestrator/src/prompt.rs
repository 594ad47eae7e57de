//! Prompt construction for the summarizer.

use notify_core::{InboundEvent, NotifyError};

use crate::config::SummaryStyle;

/// Placeholder replaced by the serialized event.
pub const EVENT_PLACEHOLDER: &str = "{event_string}";

const NARRATIVE_TEMPLATE: &str = include_str!("../prompts/narrative.md");
const BRIEF_TEMPLATE: &str = include_str!("../prompts/brief.md");
const STRUCTURED_TEMPLATE: &str = include_str!("../prompts/structured.md");

/// The static instruction template for a style.
pub fn template_for(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Narrative => NARRATIVE_TEMPLATE,
        SummaryStyle::Brief => BRIEF_TEMPLATE,
        SummaryStyle::Structured => STRUCTURED_TEMPLATE,
    }
}

/// Build the full prompt: instructions followed by the event as JSON.
pub fn build_prompt(event: &InboundEvent, style: SummaryStyle) -> Result<String, NotifyError> {
    let event_string = event.to_json()?;
    Ok(template_for(style).replace(EVENT_PLACEHOLDER, &event_string))
}
