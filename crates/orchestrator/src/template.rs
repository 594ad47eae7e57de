//! Deterministic Slack-markdown rendering of an event.

use notify_core::InboundEvent;

/// Render an event into the fixed notification layout.
///
/// The output is a pure function of the event: a bolded title line, then
/// monospaced account, region, resources and detail blocks in that order.
pub fn render_event(event: &InboundEvent) -> String {
    let resources = event.resources.join("\n");
    let detail = event
        .detail
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("\n");

    let mut text = format!(
        "*:loudspeaker: [{}]: {} :loudspeaker:*\n\n",
        event.source.to_uppercase(),
        event.detail_type
    );
    text.push_str(&format!("*AWS Account*\n```{}```\n\n", event.account));
    text.push_str(&format!("*AWS Region* \n```{}```\n\n", event.region));
    text.push_str(&format!("*Resources*\n```{}```\n\n", resources));
    text.push_str(&format!("*Detail*\n```{}```", detail));
    text
}
