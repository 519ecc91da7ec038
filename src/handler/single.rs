//! Single audit notifier — one detailed message per pub/sub event

use super::topic_message;
use crate::config::NotifierConfig;
use crate::delivery::{deliver, Notifier};
use crate::extract::ScalingRecord;
use crate::message::scaling_event_message;
use crate::types::{Acknowledgement, TopicEnvelope};
use chrono::Utc;

/// Handle a pub/sub delivery of audit events
pub async fn handle_audit_event(
    notifier: &dyn Notifier,
    config: &NotifierConfig,
    envelope: TopicEnvelope,
) -> Acknowledgement {
    if envelope.records.is_empty() {
        tracing::info!("No records in notification envelope");
    }

    for record in &envelope.records {
        let parsed = match topic_message(record).and_then(ScalingRecord::from_event_json) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Error parsing audit event");
                continue;
            }
        };

        tracing::debug!(
            service = %parsed.service,
            action = %parsed.action,
            success = parsed.success,
            "Audit event extracted"
        );

        let message = scaling_event_message(&parsed, &config.environment, Utc::now());
        deliver(notifier, message).await;
    }

    Acknowledgement::OK
}
