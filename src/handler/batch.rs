//! Batch audit notifier — one summary message per queued batch

use crate::config::NotifierConfig;
use crate::delivery::{deliver, Notifier};
use crate::error::{NotifierError, Result};
use crate::extract::ScalingRecord;
use crate::summary::build_summary_message;
use crate::types::{Acknowledgement, QueueBatch, QueueRecord};
use chrono::Utc;

/// Handle one queued batch of audit events
pub async fn handle_batch(
    notifier: &dyn Notifier,
    config: &NotifierConfig,
    batch: QueueBatch,
) -> Acknowledgement {
    let records = collect_records(&batch);

    let Some(message) = build_summary_message(&records, &config.environment, Utc::now()) else {
        tracing::info!(received = batch.records.len(), "No valid records to process");
        return Acknowledgement::OK;
    };

    tracing::debug!(
        received = batch.records.len(),
        parsed = records.len(),
        "Sending batch summary"
    );
    deliver(notifier, message).await;

    Acknowledgement::OK
}

/// Extract every parseable record, in order, skipping the rest
pub fn collect_records(batch: &QueueBatch) -> Vec<ScalingRecord> {
    batch
        .records
        .iter()
        .filter_map(|record| match parse_record(record) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(
                    message_id = record.message_id.as_deref().unwrap_or("-"),
                    error = %e,
                    "Error parsing record"
                );
                None
            }
        })
        .collect()
}

fn parse_record(record: &QueueRecord) -> Result<ScalingRecord> {
    let body = record.body.as_deref().ok_or_else(|| {
        NotifierError::MissingBody(record.message_id.clone().unwrap_or_else(|| "-".to_string()))
    })?;
    ScalingRecord::from_event_json(body)
}
