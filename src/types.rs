//! Wire envelopes for the three event sources
//!
//! Every field is optional or defaulted: upstream payloads are not
//! validated, and a missing field turns into a placeholder later on
//! rather than a deserialization failure. Nested objects are `Option`
//! so that an explicit JSON `null` is accepted as well.

use serde::{Deserialize, Serialize};

// ─── Transport envelopes ─────────────────────────────────────────

/// A batch of queued messages delivered in one invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueBatch {
    #[serde(rename = "Records", default)]
    pub records: Vec<QueueRecord>,
}

/// One queued message; `body` holds a JSON-encoded event-bus event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(default)]
    pub body: Option<String>,
}

/// A pub/sub topic delivery
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<TopicRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicRecord {
    #[serde(rename = "Sns", default)]
    pub sns: TopicMessage,
}

/// Topic message; `message` holds a JSON-encoded event-bus event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

// ─── Event-bus events ────────────────────────────────────────────

/// Event-bus event wrapping an audit-log record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(rename = "detail-type", default, skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,

    #[serde(default)]
    pub detail: Option<AuditDetail>,
}

/// The audit-log record of one API call against the container service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetail {
    /// API operation name (e.g. "UpdateService")
    #[serde(default)]
    pub event_name: Option<String>,

    #[serde(default)]
    pub request_parameters: Option<RequestParameters>,

    /// Raw response; shape varies per operation
    #[serde(default)]
    pub response_elements: Option<serde_json::Value>,

    #[serde(default)]
    pub user_identity: Option<UserIdentity>,

    /// Present only when the call failed
    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub cluster: Option<String>,

    /// Kept as raw JSON: callers may send a number, a string, or nothing
    #[serde(default)]
    pub desired_count: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(default)]
    pub session_context: Option<SessionContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    #[serde(default)]
    pub session_issuer: Option<SessionIssuer>,
}

/// The role that issued the session making the call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIssuer {
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Event-bus event describing a scheduler execution state change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub detail: Option<ScheduleDetail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetail {
    #[serde(default)]
    pub execution_id: Option<String>,

    /// SUCCEEDED, FAILED, or any other scheduler state
    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub schedule_arn: Option<String>,
}

// ─── Invocation result ───────────────────────────────────────────

/// Fixed result handed back to the invoking runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub status_code: u16,
}

impl Acknowledgement {
    /// The only acknowledgement a handler ever returns
    pub const OK: Self = Self { status_code: 200 };
}

impl Default for Acknowledgement {
    fn default() -> Self {
        Self::OK
    }
}
