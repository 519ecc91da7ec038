//! Schedule-state notifier — one message per scheduler execution outcome

use super::topic_message;
use crate::config::NotifierConfig;
use crate::delivery::{deliver, Notifier};
use crate::extract::ScheduleRecord;
use crate::message::schedule_state_message;
use crate::types::{Acknowledgement, TopicEnvelope};
use chrono::Utc;

/// Handle a pub/sub delivery of scheduler state changes
pub async fn handle_schedule_state(
    notifier: &dyn Notifier,
    config: &NotifierConfig,
    envelope: TopicEnvelope,
) -> Acknowledgement {
    if envelope.records.is_empty() {
        tracing::info!("No records in notification envelope");
    }

    for record in &envelope.records {
        let parsed = match topic_message(record).and_then(ScheduleRecord::from_event_json) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Error parsing scheduler event");
                continue;
            }
        };

        tracing::debug!(
            schedule = %parsed.schedule_name,
            state = parsed.state.as_str(),
            "Scheduler event extracted"
        );

        let message = schedule_state_message(&parsed, &config.environment, Utc::now());
        deliver(notifier, message).await;
    }

    Acknowledgement::OK
}
