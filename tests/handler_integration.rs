//! Handler integration tests
//!
//! End-to-end runs of the three handlers against the in-memory notifier,
//! starting from raw JSON envelopes as the function runtime delivers them.

use ecs_scaling_notifier::{
    handler, Acknowledgement, Color, MemoryNotifier, NotifierConfig, QueueBatch, TopicEnvelope,
};
use serde_json::json;

fn config() -> NotifierConfig {
    NotifierConfig::new("https://hooks.example.com/services/T0/B0/x", "prod")
}

fn audit_event(service: &str, desired: serde_json::Value, error: Option<(&str, &str)>) -> String {
    let mut detail = json!({
        "eventName": "UpdateService",
        "requestParameters": {
            "service": service,
            "cluster": "prod-cluster",
            "desiredCount": desired
        },
        "userIdentity": {
            "sessionContext": {"sessionIssuer": {"userName": "ecs-scheduler-role"}}
        }
    });
    if let Some((code, message)) = error {
        detail["errorCode"] = json!(code);
        detail["errorMessage"] = json!(message);
    }
    json!({
        "version": "0",
        "detail-type": "AWS API Call via CloudTrail",
        "source": "aws.ecs",
        "detail": detail
    })
    .to_string()
}

fn queue_batch(bodies: Vec<String>) -> QueueBatch {
    let records: Vec<_> = bodies
        .into_iter()
        .enumerate()
        .map(|(i, body)| json!({"messageId": format!("m-{}", i), "body": body}))
        .collect();
    serde_json::from_value(json!({ "Records": records })).unwrap()
}

fn topic_envelope(messages: Vec<String>) -> TopicEnvelope {
    let records: Vec<_> = messages
        .into_iter()
        .map(|message| json!({"EventSource": "aws:sns", "Sns": {"Message": message}}))
        .collect();
    serde_json::from_value(json!({ "Records": records })).unwrap()
}

// ─── Batch Audit Notifier ────────────────────────────────────────

#[tokio::test]
async fn test_batch_all_success() {
    let notifier = MemoryNotifier::default();
    let batch = queue_batch(vec![
        audit_event("api", json!(3), None),
        audit_event("worker", json!(0), None),
    ]);

    let ack = handler::handle_batch(&notifier, &config(), batch).await;
    assert_eq!(ack, Acknowledgement::OK);

    let sent = notifier.sent().await;
    assert_eq!(sent.len(), 1);
    let message = &sent[0].attachments[0];
    assert_eq!(message.color, Color::Good);
    assert!(message.title.contains("Completed"));
    assert_eq!(message.field("Environment"), Some("PROD"));
    assert_eq!(message.field("Total Services"), Some("2 (2 succeeded, 0 failed)"));
}

#[tokio::test]
async fn test_batch_mixed_outcomes() {
    let notifier = MemoryNotifier::default();
    let batch = queue_batch(vec![
        audit_event("api", json!(3), None),
        audit_event("worker", json!(1), Some(("ThrottlingException", "Rate exceeded"))),
        audit_event("cron", json!("x"), None),
    ]);

    handler::handle_batch(&notifier, &config(), batch).await;

    let sent = notifier.sent().await;
    let message = &sent[0].attachments[0];
    assert_eq!(message.color, Color::Warning);
    assert!(message.title.contains("Partially Completed"));
    assert_eq!(
        message.field(":x: Failure Details"),
        Some("- `worker`: ThrottlingException - Rate exceeded")
    );
    assert!(message
        .field("Services")
        .unwrap()
        .contains(":white_check_mark: `cron` - Update (-> UNKNOWN)"));
}

#[tokio::test]
async fn test_batch_all_failed() {
    let notifier = MemoryNotifier::default();
    let batch = queue_batch(vec![audit_event("api", json!(0), Some(("AccessDenied", "no")))]);

    handler::handle_batch(&notifier, &config(), batch).await;

    let sent = notifier.sent().await;
    let message = &sent[0].attachments[0];
    assert_eq!(message.color, Color::Danger);
    assert!(message.title.contains("Failed"));
}

#[tokio::test]
async fn test_empty_batch_is_silent() {
    let notifier = MemoryNotifier::default();

    let ack = handler::handle_batch(&notifier, &config(), QueueBatch::default()).await;

    assert_eq!(ack, Acknowledgement::OK);
    assert_eq!(notifier.attempts(), 0);
}

#[tokio::test]
async fn test_batch_of_unparseable_records_is_silent() {
    let notifier = MemoryNotifier::default();
    let batch = queue_batch(vec!["not json".to_string(), r#"{"detail": 5}"#.to_string()]);

    let ack = handler::handle_batch(&notifier, &config(), batch).await;

    assert_eq!(ack, Acknowledgement::OK);
    assert_eq!(notifier.attempts(), 0);
}

#[tokio::test]
async fn test_bad_record_does_not_abort_batch() {
    let notifier = MemoryNotifier::default();
    let batch = queue_batch(vec![
        "{broken".to_string(),
        audit_event("api", json!(2), None),
    ]);

    handler::handle_batch(&notifier, &config(), batch).await;

    let sent = notifier.sent().await;
    let message = &sent[0].attachments[0];
    assert_eq!(message.field("Total Services"), Some("1 (1 succeeded, 0 failed)"));
}

#[tokio::test]
async fn test_batch_delivery_failure_still_acknowledged() {
    let notifier = MemoryNotifier::failing();
    let batch = queue_batch(vec![audit_event("api", json!(1), None)]);

    let ack = handler::handle_batch(&notifier, &config(), batch).await;

    assert_eq!(ack, Acknowledgement::OK);
    assert_eq!(notifier.attempts(), 1);
}

// ─── Single Audit Notifier ───────────────────────────────────────

#[tokio::test]
async fn test_single_event_success() {
    let notifier = MemoryNotifier::default();
    let envelope = topic_envelope(vec![audit_event("api", json!(4), None)]);

    let ack = handler::handle_audit_event(&notifier, &config(), envelope).await;
    assert_eq!(ack, Acknowledgement::OK);

    let sent = notifier.sent().await;
    assert_eq!(sent.len(), 1);
    let message = &sent[0].attachments[0];
    assert_eq!(message.color, Color::Good);
    assert_eq!(message.field("Service"), Some("api"));
    assert_eq!(message.field("Action"), Some("Scale Up"));
    assert_eq!(message.field("Executed By"), Some("ecs-scheduler-role"));
    assert_eq!(message.field("API Call"), Some("UpdateService"));
    assert_eq!(message.fields.first().unwrap().title, "Service");
    assert_eq!(message.fields.last().unwrap().title, "Time");
}

#[tokio::test]
async fn test_single_event_failure_truncated() {
    let notifier = MemoryNotifier::default();
    let long = "z".repeat(400);
    let envelope = topic_envelope(vec![audit_event(
        "api",
        json!(0),
        Some(("InvalidParameterException", long.as_str())),
    )]);

    handler::handle_audit_event(&notifier, &config(), envelope).await;

    let sent = notifier.sent().await;
    let message = &sent[0].attachments[0];
    assert_eq!(message.color, Color::Danger);
    assert_eq!(message.field("Error").unwrap().chars().count(), 200);
}

#[tokio::test]
async fn test_single_envelope_with_several_records() {
    let notifier = MemoryNotifier::default();
    let envelope = topic_envelope(vec![
        audit_event("api", json!(1), None),
        "garbage".to_string(),
        audit_event("worker", json!(0), None),
    ]);

    handler::handle_audit_event(&notifier, &config(), envelope).await;

    let sent = notifier.sent().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].attachments[0].field("Service"), Some("worker"));
}

#[tokio::test]
async fn test_single_empty_envelope() {
    let notifier = MemoryNotifier::default();
    let ack = handler::handle_audit_event(&notifier, &config(), TopicEnvelope::default()).await;

    assert_eq!(ack, Acknowledgement::OK);
    assert_eq!(notifier.attempts(), 0);
}

// ─── Schedule-State Notifier ─────────────────────────────────────

fn schedule_event(state: &str, arn: &str) -> String {
    json!({
        "source": "aws.scheduler",
        "detail-type": "EventBridge Scheduler Execution State Change",
        "detail": {"executionId": "exec-7", "state": state, "scheduleArn": arn}
    })
    .to_string()
}

#[tokio::test]
async fn test_schedule_succeeded() {
    let notifier = MemoryNotifier::default();
    let envelope = topic_envelope(vec![schedule_event(
        "SUCCEEDED",
        "arn:aws:scheduler:ap-northeast-2:123456789012:schedule/default/mySchedule",
    )]);

    let ack = handler::handle_schedule_state(&notifier, &config(), envelope).await;
    assert_eq!(ack, Acknowledgement::OK);

    let sent = notifier.sent().await;
    let message = &sent[0].attachments[0];
    assert_eq!(message.color, Color::Good);
    assert_eq!(message.field("Schedule"), Some("mySchedule"));
    assert_eq!(message.field("Execution ID"), Some("exec-7"));
    assert!(message.field("Time").unwrap().ends_with(" KST"));
}

#[tokio::test]
async fn test_schedule_failed_and_other_states() {
    let notifier = MemoryNotifier::default();
    let envelope = topic_envelope(vec![
        schedule_event("FAILED", ""),
        schedule_event("TIMED_OUT", "arn:aws:scheduler:::schedule/g/s"),
    ]);

    handler::handle_schedule_state(&notifier, &config(), envelope).await;

    let sent = notifier.sent().await;
    assert_eq!(sent.len(), 2);

    let failed = &sent[0].attachments[0];
    assert_eq!(failed.color, Color::Danger);
    assert_eq!(failed.field("Schedule"), Some("UNKNOWN"));

    let other = &sent[1].attachments[0];
    assert_eq!(other.color, Color::Warning);
    assert_eq!(other.title, ":question: ECS Scheduling Status: TIMED_OUT");
}

#[tokio::test]
async fn test_schedule_delivery_failure_still_acknowledged() {
    let notifier = MemoryNotifier::failing();
    let envelope = topic_envelope(vec![schedule_event("SUCCEEDED", "a/b")]);

    let ack = handler::handle_schedule_state(&notifier, &config(), envelope).await;
    assert_eq!(ack, Acknowledgement::OK);
}
