//! End-to-end processing of one inbound event.

use std::sync::Arc;

use notify_core::{InboundEvent, NotificationPayload, NotifyError, Publisher, Rendered, Summarizer};
use serde_json::Value;
use tracing::{debug, info, info_span, Instrument};

use crate::assembler::assemble;
use crate::config::{PipelineConfig, RenderMode, SummaryStyle};
use crate::contract::parse_response;
use crate::dispatcher::Dispatcher;
use crate::prompt::build_prompt;
use crate::template::render_event;

/// Coordinates binding, rendering, assembly and dispatch of events.
///
/// Each call to [`Pipeline::run`] either publishes exactly one notification
/// or returns an error without publishing anything.
pub struct Pipeline<P: Publisher> {
    mode: RenderMode,
    summarizer: Option<Arc<dyn Summarizer>>,
    dispatcher: Dispatcher<P>,
}

impl<P: Publisher> Pipeline<P> {
    /// Create a pipeline publishing through `publisher`.
    pub fn new(config: PipelineConfig, publisher: P) -> Self {
        Self {
            mode: config.mode,
            summarizer: None,
            dispatcher: Dispatcher::new(publisher, config.destination),
        }
    }

    /// Attach the summarizer used by AI render modes.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// The active render mode.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn dispatcher(&self) -> &Dispatcher<P> {
        &self.dispatcher
    }

    /// Check that the pipeline can serve its render mode.
    pub fn validate(&self) -> Result<(), NotifyError> {
        if self.mode.uses_ai() && self.summarizer.is_none() {
            return Err(NotifyError::Configuration(format!(
                "render mode {:?} requires a summarizer",
                self.mode
            )));
        }
        Ok(())
    }

    /// Process one raw event payload.
    pub async fn run(&self, raw: Value) -> Result<(), NotifyError> {
        self.validate()?;

        let event = InboundEvent::from_value(raw)?;
        let span = info_span!(
            "notify",
            source = %event.source,
            detail_type = %event.detail_type
        );

        async {
            let payload = self.prepare(&event).await?;
            self.dispatcher.dispatch(&payload).await?;
            info!("Notification published");
            Ok::<(), NotifyError>(())
        }
        .instrument(span)
        .await
    }

    /// Render and assemble a payload without publishing it.
    pub async fn prepare(&self, event: &InboundEvent) -> Result<NotificationPayload, NotifyError> {
        let rendered = match self.mode {
            RenderMode::Template => Rendered::plain(render_event(event)),
            RenderMode::Ai(style) => self.summarize(event, style).await?,
        };
        Ok(assemble(rendered))
    }

    async fn summarize(&self, event: &InboundEvent, style: SummaryStyle) -> Result<Rendered, NotifyError> {
        let summarizer = self.summarizer.as_ref().ok_or_else(|| {
            NotifyError::Configuration(format!("{} summaries require a summarizer", style))
        })?;

        let prompt = build_prompt(event, style)?;
        debug!(style = %style, chars = prompt.len(), "Built prompt");

        let response = summarizer.summarize(&prompt).await?;
        info!(
            summarizer = summarizer.name(),
            chars = response.len(),
            "Received summary"
        );
        debug!("Raw summary: {}", response);

        parse_response(&response, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_brain::{EchoSummarizer, FixedSummarizer, RecordingPublisher};
    use serde_json::json;

    fn raw_event() -> Value {
        json!({
            "account": "111122223333",
            "region": "eu-west-1",
            "source": "aws.health",
            "detail-type": "AWS Health Event",
            "detail": { "service": "EC2" },
            "resources": []
        })
    }

    #[tokio::test]
    async fn test_validate_rejects_ai_without_summarizer() {
        let pipeline = Pipeline::new(
            PipelineConfig::ai("arn:topic", SummaryStyle::Brief),
            RecordingPublisher::new(),
        );

        assert!(matches!(pipeline.validate(), Err(NotifyError::Configuration(_))));
        assert!(matches!(
            pipeline.run(raw_event()).await,
            Err(NotifyError::Configuration(_))
        ));
        assert_eq!(pipeline.dispatcher().publisher().publish_count(), 0);
    }

    #[tokio::test]
    async fn test_template_mode_ignores_summarizer() {
        let summarizer = Arc::new(FixedSummarizer::new("unused"));
        let pipeline = Pipeline::new(PipelineConfig::template("arn:topic"), RecordingPublisher::new())
            .with_summarizer(summarizer.clone());

        pipeline.run(raw_event()).await.unwrap();

        assert_eq!(summarizer.call_count(), 0);
        assert_eq!(pipeline.dispatcher().publisher().publish_count(), 1);
    }

    #[tokio::test]
    async fn test_prepare_sends_prompt_to_summarizer() {
        let pipeline = Pipeline::new(
            PipelineConfig::ai("arn:topic", SummaryStyle::Narrative),
            RecordingPublisher::new(),
        )
        .with_summarizer(Arc::new(EchoSummarizer::new()));

        let event = InboundEvent::from_value(raw_event()).unwrap();
        let payload = pipeline.prepare(&event).await.unwrap();

        assert_eq!(
            payload.content.description,
            build_prompt(&event, SummaryStyle::Narrative).unwrap()
        );
        assert_eq!(pipeline.dispatcher().publisher().publish_count(), 0);
    }
}
