//! Batch aggregation — fold a batch of scaling records into one summary

use crate::extract::ScalingRecord;
use crate::message::{
    truncate, Color, Field, NotificationMessage, BATCH_ERROR_LIMIT, ICON_FAILURE, ICON_SUCCESS,
    ICON_WARNING,
};
use chrono::{DateTime, Utc};

/// Overall status of a non-empty batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Completed,
    PartiallyCompleted,
    Failed,
}

impl BatchOutcome {
    /// Classify a batch; `None` when it is empty
    pub fn classify(records: &[ScalingRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let failed = records.iter().filter(|r| !r.success).count();
        Some(if failed == 0 {
            BatchOutcome::Completed
        } else if failed == records.len() {
            BatchOutcome::Failed
        } else {
            BatchOutcome::PartiallyCompleted
        })
    }

    pub fn color(&self) -> Color {
        match self {
            BatchOutcome::Completed => Color::Good,
            BatchOutcome::PartiallyCompleted => Color::Warning,
            BatchOutcome::Failed => Color::Danger,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BatchOutcome::Completed => ICON_SUCCESS,
            BatchOutcome::PartiallyCompleted => ICON_WARNING,
            BatchOutcome::Failed => ICON_FAILURE,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BatchOutcome::Completed => "ECS Scheduled Scaling Completed",
            BatchOutcome::PartiallyCompleted => "ECS Scheduled Scaling Partially Completed",
            BatchOutcome::Failed => "ECS Scheduled Scaling Failed",
        }
    }
}

/// Build the summary message for a batch, or `None` for an empty batch
pub fn build_summary_message(
    records: &[ScalingRecord],
    environment: &str,
    now: DateTime<Utc>,
) -> Option<NotificationMessage> {
    let outcome = BatchOutcome::classify(records)?;

    let failures: Vec<&ScalingRecord> = records.iter().filter(|r| !r.success).collect();
    let succeeded = records.len() - failures.len();

    let service_lines = records
        .iter()
        .map(service_line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut message = NotificationMessage::new(
        outcome.color(),
        format!("{} {}", outcome.icon(), outcome.title()),
    )
    .with_field(Field::short("Environment", environment.to_uppercase()))
    .with_field(Field::short(
        "Total Services",
        format!(
            "{} ({} succeeded, {} failed)",
            records.len(),
            succeeded,
            failures.len()
        ),
    ))
    .with_field(Field::long("Services", service_lines));

    if !failures.is_empty() {
        let details = failures
            .iter()
            .map(|r| failure_line(r))
            .collect::<Vec<_>>()
            .join("\n");
        message = message.with_field(Field::long(
            format!("{} Failure Details", ICON_FAILURE),
            details,
        ));
    }

    Some(message.with_timestamp(now))
}

fn service_line(record: &ScalingRecord) -> String {
    let icon = if record.success {
        ICON_SUCCESS
    } else {
        ICON_FAILURE
    };
    format!(
        "{} `{}` - {} (-> {})",
        icon, record.service, record.action, record.desired_count
    )
}

fn failure_line(record: &ScalingRecord) -> String {
    format!(
        "- `{}`: {} - {}",
        record.service,
        record.error_code.as_deref().unwrap_or_default(),
        truncate(&record.error_message, BATCH_ERROR_LIMIT)
    )
}
