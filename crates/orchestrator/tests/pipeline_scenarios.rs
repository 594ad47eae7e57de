//! End-to-end pipeline scenarios against in-memory transports.

use std::sync::Arc;

use mock_brain::{FailingSummarizer, FixedSummarizer, RecordingPublisher};
use notify_core::BindError;
use orchestrator::{NotifyError, Pipeline, PipelineConfig, SummaryStyle};
use serde_json::{json, Value};

const TOPIC: &str = "arn:aws:sns:us-east-1:111122223333:chatbot";

fn ec2_event() -> Value {
    json!({
        "version": "0",
        "id": "7bf73129-1428-4cd3-a780-95db273d1602",
        "account": "111122223333",
        "region": "us-east-1",
        "source": "aws.ec2",
        "detail-type": "EC2 Instance State-change Notification",
        "time": "2024-01-01T00:00:00Z",
        "detail": { "instance-id": "i-abc123", "state": "running" },
        "resources": ["arn:aws:ec2:us-east-1:111122223333:instance/i-abc123"]
    })
}

fn published(publisher: &RecordingPublisher) -> Value {
    let messages = publisher.messages();
    assert_eq!(messages.len(), 1, "expected exactly one publish");
    assert_eq!(messages[0].destination, TOPIC);
    serde_json::from_str(&messages[0].message).unwrap()
}

#[tokio::test]
async fn test_template_path_renders_fixed_layout() {
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::template(TOPIC), publisher.clone());

    pipeline.run(ec2_event()).await.unwrap();

    let body = published(&publisher);
    let text = body["content"]["description"].as_str().unwrap();

    assert!(text.starts_with(
        "*:loudspeaker: [AWS.EC2]: EC2 Instance State-change Notification :loudspeaker:*"
    ));
    let account = text.find("*AWS Account*").unwrap();
    let region = text.find("*AWS Region*").unwrap();
    let resources = text.find("*Resources*").unwrap();
    let detail = text.find("*Detail*").unwrap();
    assert!(account < region && region < resources && resources < detail);
    assert!(text.contains("instance-id: i-abc123\nstate: running"));

    assert_eq!(body["content"]["textType"], "client-markdown");
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["source"], "custom");
    assert!(body.get("metadata").is_none());
}

#[tokio::test]
async fn test_missing_field_fails_without_publishing() {
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::template(TOPIC), publisher.clone());

    let mut event = ec2_event();
    event.as_object_mut().unwrap().remove("region");

    let err = pipeline.run(event).await.unwrap_err();
    match &err {
        NotifyError::Shape(BindError::Missing(keys)) => assert_eq!(keys, &vec!["region".to_string()]),
        other => panic!("Expected missing-keys error, got {other:?}"),
    }
    assert!(err.to_string().contains("region"));
    assert_eq!(publisher.publish_count(), 0);
}

#[tokio::test]
async fn test_structured_contract_violation_fails_without_publishing() {
    let publisher = Arc::new(RecordingPublisher::new());
    let summarizer = Arc::new(FixedSummarizer::new(r#"{"title":"x","description":"y"}"#));
    let pipeline = Pipeline::new(PipelineConfig::ai(TOPIC, SummaryStyle::Structured), publisher.clone())
        .with_summarizer(summarizer.clone());

    let err = pipeline.run(ec2_event()).await.unwrap_err();

    assert!(matches!(err, NotifyError::ContractViolation(_)));
    assert_eq!(summarizer.call_count(), 1);
    assert_eq!(publisher.publish_count(), 0);
}

#[tokio::test]
async fn test_structured_success_carries_fields_verbatim() {
    let summary = json!({
        "title": ":large_green_circle: EC2 | Instance Running",
        "description": "Instance `i-abc123` in account `111122223333` is now *running*.",
        "keywords": ["ec2", "instance-running", "us-east-1"],
        "threadId": "i-abc123",
        "nextSteps": ["No action is required."],
        "summary": "EC2 instance i-abc123 is running."
    });
    let publisher = Arc::new(RecordingPublisher::new());
    let summarizer = Arc::new(FixedSummarizer::new(summary.to_string()));
    let pipeline = Pipeline::new(PipelineConfig::ai(TOPIC, SummaryStyle::Structured), publisher.clone())
        .with_summarizer(summarizer.clone());

    pipeline.run(ec2_event()).await.unwrap();

    let body = published(&publisher);
    assert_eq!(
        body,
        json!({
            "content": {
                "description": summary["description"],
                "textType": "client-markdown",
                "title": summary["title"],
                "keywords": summary["keywords"],
                "nextSteps": summary["nextSteps"]
            },
            "metadata": {
                "threadId": summary["threadId"],
                "summary": summary["summary"]
            },
            "version": "1.0",
            "source": "custom"
        })
    );

    let prompts = summarizer.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"detail_type\":\"EC2 Instance State-change Notification\""));
}

#[tokio::test]
async fn test_narrative_output_is_delivered_unchecked() {
    let reply = "{ not json, and not prose either";
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::ai(TOPIC, SummaryStyle::Narrative), publisher.clone())
        .with_summarizer(Arc::new(FixedSummarizer::new(reply)));

    pipeline.run(ec2_event()).await.unwrap();

    let body = published(&publisher);
    assert_eq!(body["content"]["description"], reply);
    assert!(body["content"].get("title").is_none());
    assert!(body.get("metadata").is_none());
}

#[tokio::test]
async fn test_summarizer_failure_fails_without_publishing() {
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::ai(TOPIC, SummaryStyle::Brief), publisher.clone())
        .with_summarizer(Arc::new(FailingSummarizer::default()));

    let err = pipeline.run(ec2_event()).await.unwrap_err();

    assert!(matches!(err, NotifyError::Transport { service: "bedrock", .. }));
    assert_eq!(publisher.publish_count(), 0);
}

#[tokio::test]
async fn test_ai_mode_without_summarizer_is_a_configuration_error() {
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::ai(TOPIC, SummaryStyle::Structured), publisher.clone());

    let err = pipeline.run(ec2_event()).await.unwrap_err();

    assert!(matches!(err, NotifyError::Configuration(_)));
    assert_eq!(publisher.publish_count(), 0);
}

#[tokio::test]
async fn test_non_object_payload_is_rejected() {
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::template(TOPIC), publisher.clone());

    for raw in [json!([]), json!("event"), Value::Null] {
        let err = pipeline.run(raw).await.unwrap_err();
        assert!(matches!(err, NotifyError::Shape(BindError::NotAnObject)));
    }
    assert_eq!(publisher.publish_count(), 0);
}

#[tokio::test]
async fn test_mixed_case_keys_bind() {
    let publisher = Arc::new(RecordingPublisher::new());
    let pipeline = Pipeline::new(PipelineConfig::template(TOPIC), publisher.clone());

    let event = json!({
        "Account": "111122223333",
        "Region": "us-east-1",
        "Source": "aws.s3",
        "DetailType": "Object Created",
        "Detail": { "bucket": "logs" },
        "Resources": []
    });
    pipeline.run(event).await.unwrap();

    let body = published(&publisher);
    assert!(body["content"]["description"]
        .as_str()
        .unwrap()
        .starts_with("*:loudspeaker: [AWS.S3]: Object Created :loudspeaker:*"));
}
