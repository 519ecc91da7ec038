//! Notification message model and per-event formatting
//!
//! Messages use the incoming-webhook attachment layout:
//! `{attachments: [{color, title, fields: [{title, value, short}], footer}]}`.
//! Field order is always identifying fields, then action/status, then
//! free-text details, then the timestamp.

use crate::extract::{ExecutionState, ScalingRecord, ScheduleRecord};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Footer attached to every message
pub const FOOTER: &str = "ECS Scheduler Monitor";

/// Max error-text length inside a batch summary
pub const BATCH_ERROR_LIMIT: usize = 100;

/// Max error-text length in a single-event message
pub const SINGLE_ERROR_LIMIT: usize = 200;

/// Fixed display offset from UTC, in hours
pub const DISPLAY_OFFSET_HOURS: i64 = 9;

/// Label printed after the shifted timestamp
pub const DISPLAY_ZONE_LABEL: &str = "KST";

pub const ICON_SUCCESS: &str = ":white_check_mark:";
pub const ICON_FAILURE: &str = ":x:";
pub const ICON_WARNING: &str = ":warning:";
pub const ICON_UNKNOWN: &str = ":question:";

/// Attachment side-bar color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Good,
    Warning,
    Danger,
}

/// One titled value inside an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    /// Short fields render side by side
    pub short: bool,
}

impl Field {
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}

/// A single rendered notification (one attachment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub color: Color,
    pub title: String,
    pub fields: Vec<Field>,
    pub footer: String,
}

impl NotificationMessage {
    /// Start a message with the standard footer and no fields
    pub fn new(color: Color, title: impl Into<String>) -> Self {
        Self {
            color,
            title: title.into(),
            fields: Vec::new(),
            footer: FOOTER.to_string(),
        }
    }

    /// Append a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append the closing `Time` field
    pub fn with_timestamp(self, now: DateTime<Utc>) -> Self {
        self.with_field(Field::long("Time", format_timestamp(now)))
    }

    /// Look up a field value by title
    pub fn field(&self, title: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.title == title)
            .map(|f| f.value.as_str())
    }
}

/// JSON body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub attachments: Vec<NotificationMessage>,
}

impl From<NotificationMessage> for WebhookPayload {
    fn from(message: NotificationMessage) -> Self {
        Self {
            attachments: vec![message],
        }
    }
}

/// Cut `text` to at most `max_chars` characters
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// `YYYY-MM-DD HH:MM:SS KST`, shifted by the fixed display offset
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    let shifted = now + Duration::hours(DISPLAY_OFFSET_HOURS);
    format!(
        "{} {}",
        shifted.format("%Y-%m-%d %H:%M:%S"),
        DISPLAY_ZONE_LABEL
    )
}

/// Detailed message for a single audited scaling call
pub fn scaling_event_message(
    record: &ScalingRecord,
    environment: &str,
    now: DateTime<Utc>,
) -> NotificationMessage {
    let (color, title) = if record.success {
        (
            Color::Good,
            format!("{} ECS Service Scaling Succeeded", ICON_SUCCESS),
        )
    } else {
        (Color::Danger, format!("{} ECS Service Scaling Failed", ICON_FAILURE))
    };

    let mut message = NotificationMessage::new(color, title)
        .with_field(Field::short("Service", record.service.as_str()))
        .with_field(Field::short("Environment", environment.to_uppercase()))
        .with_field(Field::short("Cluster", record.cluster.as_str()))
        .with_field(Field::short("Action", record.action.as_str()))
        .with_field(Field::short("Desired Count", record.desired_count.to_string()));

    if let Some(running) = record.running_count {
        message = message.with_field(Field::short("Running Count", running.to_string()));
    }

    message = message
        .with_field(Field::short("Executed By", record.actor_role.as_str()))
        .with_field(Field::short("API Call", record.event_name.as_str()));

    if !record.success {
        let detail = format!(
            "{} - {}",
            record.error_code.as_deref().unwrap_or_default(),
            record.error_message
        );
        message = message.with_field(Field::long("Error", truncate(&detail, SINGLE_ERROR_LIMIT)));
    }

    message.with_timestamp(now)
}

/// Message reflecting one scheduler execution outcome
pub fn schedule_state_message(
    record: &ScheduleRecord,
    environment: &str,
    now: DateTime<Utc>,
) -> NotificationMessage {
    let (color, title) = match &record.state {
        ExecutionState::Succeeded => (
            Color::Good,
            format!("{} ECS Scheduling Succeeded", ICON_SUCCESS),
        ),
        ExecutionState::Failed => (Color::Danger, format!("{} ECS Scheduling Failed", ICON_FAILURE)),
        ExecutionState::Other(state) => (
            Color::Warning,
            format!("{} ECS Scheduling Status: {}", ICON_UNKNOWN, state),
        ),
    };

    NotificationMessage::new(color, title)
        .with_field(Field::short("Schedule", record.schedule_name.as_str()))
        .with_field(Field::short("Environment", environment.to_uppercase()))
        .with_field(Field::short("Status", record.state.as_str()))
        .with_field(Field::long("Execution ID", record.execution_id.as_str()))
        .with_timestamp(now)
}
