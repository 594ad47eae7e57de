//! AWS Lambda entry point for the EventBridge chat notifier.
//!
//! Each invocation receives one EventBridge event, renders it and publishes
//! one notification to the configured SNS topic.

mod config;

use std::sync::Arc;

use bedrock_brain::BedrockBrain;
use broadcaster::{LoggingPublisher, SnsBroadcaster};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use notify_core::Publisher;
use orchestrator::Pipeline;
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::NotifierConfig;

type NotifierPipeline = Pipeline<Arc<dyn Publisher>>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_target(false)
        .without_time()
        .init();

    let config = NotifierConfig::from_env()?;
    let pipeline = build_pipeline(&config).await?;

    info!(
        topic = %config.topic_arn,
        mode = ?pipeline.mode(),
        dry_run = config.dry_run,
        "Notifier starting"
    );

    let pipeline = &pipeline;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle(pipeline, event).await
    }))
    .await
}

async fn build_pipeline(config: &NotifierConfig) -> Result<NotifierPipeline, Error> {
    let publisher: Arc<dyn Publisher> = if config.dry_run {
        Arc::new(LoggingPublisher)
    } else {
        Arc::new(SnsBroadcaster::from_env().await)
    };

    let mut pipeline = Pipeline::new(config.pipeline_config(), publisher);

    if config.use_ai {
        let brain = BedrockBrain::from_env().await?;
        info!(model = %brain.config().model_id, "Using Bedrock summarizer");
        pipeline = pipeline.with_summarizer(Arc::new(brain));
    }

    pipeline.validate()?;
    Ok(pipeline)
}

async fn handle(pipeline: &NotifierPipeline, event: LambdaEvent<Value>) -> Result<(), Error> {
    let request_id = event.context.request_id.clone();

    match pipeline.run(event.payload).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(request_id = %request_id, "Notification failed: {}", e);
            Err(e.into())
        }
    }
}
