//! Field extraction — turn raw event-bus events into typed records
//!
//! Every lookup walks the nested optional sections of the envelope and
//! falls back to a placeholder, so a partially populated event still
//! produces a record. Only a body that is not JSON at all (or whose
//! sections have the wrong JSON type) is reported as an error.

use crate::error::Result;
use crate::types::{AuditDetail, AuditEvent, ScheduleDetail, ScheduleEvent};
use std::fmt;

/// Placeholder used for any missing identifying field
pub const UNKNOWN: &str = "UNKNOWN";

/// What a scaling call did to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingAction {
    ScaleUp,
    ScaleDown,
    Update,
}

impl ScalingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalingAction::ScaleUp => "Scale Up",
            ScalingAction::ScaleDown => "Scale Down",
            ScalingAction::Update => "Update",
        }
    }
}

impl fmt::Display for ScalingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested replica count, if the call carried an integer one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredCount {
    Count(i64),
    Unknown,
}

impl DesiredCount {
    /// Read a raw `desiredCount` value; only JSON integers count
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        match value.and_then(|v| v.as_i64()) {
            Some(n) => DesiredCount::Count(n),
            None => DesiredCount::Unknown,
        }
    }

    /// 0 scales down, any positive integer scales up, everything else is an update
    pub fn action(&self) -> ScalingAction {
        match *self {
            DesiredCount::Count(0) => ScalingAction::ScaleDown,
            DesiredCount::Count(n) if n >= 1 => ScalingAction::ScaleUp,
            _ => ScalingAction::Update,
        }
    }
}

impl fmt::Display for DesiredCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesiredCount::Count(n) => write!(f, "{}", n),
            DesiredCount::Unknown => f.write_str(UNKNOWN),
        }
    }
}

/// One scaling call, flattened from its audit-log record
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingRecord {
    pub service: String,
    pub cluster: String,
    pub action: ScalingAction,
    pub desired_count: DesiredCount,
    /// Name of the role that issued the calling session
    pub actor_role: String,
    pub success: bool,
    pub error_code: Option<String>,
    pub error_message: String,
    /// API operation name
    pub event_name: String,
    /// `responseElements.service.runningCount`, when the call returned one
    pub running_count: Option<i64>,
}

impl ScalingRecord {
    /// Parse a JSON-encoded event-bus event and extract its record
    pub fn from_event_json(json: &str) -> Result<Self> {
        let event: AuditEvent = serde_json::from_str(json)?;
        Ok(Self::from_detail(&event.detail.unwrap_or_default()))
    }

    /// Extract a record from an audit detail, filling defaults
    pub fn from_detail(detail: &AuditDetail) -> Self {
        let params = detail.request_parameters.clone().unwrap_or_default();

        let actor_role = detail
            .user_identity
            .as_ref()
            .and_then(|identity| identity.session_context.as_ref())
            .and_then(|context| context.session_issuer.as_ref())
            .and_then(|issuer| issuer.user_name.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let running_count = detail
            .response_elements
            .as_ref()
            .and_then(|response| response.pointer("/service/runningCount"))
            .and_then(|count| count.as_i64());

        let desired_count = DesiredCount::from_value(params.desired_count.as_ref());

        Self {
            service: params.service.unwrap_or_else(|| UNKNOWN.to_string()),
            cluster: params.cluster.unwrap_or_else(|| UNKNOWN.to_string()),
            action: desired_count.action(),
            desired_count,
            actor_role,
            success: detail.error_code.is_none(),
            error_code: detail.error_code.clone(),
            error_message: detail.error_message.clone().unwrap_or_default(),
            event_name: detail
                .event_name
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            running_count,
        }
    }
}

/// Outcome of one scheduled execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState {
    Succeeded,
    Failed,
    Other(String),
}

impl ExecutionState {
    pub fn parse(state: &str) -> Self {
        match state {
            "SUCCEEDED" => ExecutionState::Succeeded,
            "FAILED" => ExecutionState::Failed,
            other => ExecutionState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExecutionState::Succeeded => "SUCCEEDED",
            ExecutionState::Failed => "FAILED",
            ExecutionState::Other(state) => state,
        }
    }
}

/// One scheduler state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub schedule_name: String,
    pub state: ExecutionState,
    pub execution_id: String,
}

impl ScheduleRecord {
    /// Parse a JSON-encoded scheduler event and extract its record
    pub fn from_event_json(json: &str) -> Result<Self> {
        let event: ScheduleEvent = serde_json::from_str(json)?;
        Ok(Self::from_detail(&event.detail.unwrap_or_default()))
    }

    pub fn from_detail(detail: &ScheduleDetail) -> Self {
        Self {
            schedule_name: schedule_name_from_arn(detail.schedule_arn.as_deref().unwrap_or("")),
            state: ExecutionState::parse(detail.state.as_deref().unwrap_or(UNKNOWN)),
            execution_id: detail
                .execution_id
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Last `/`-separated segment of a schedule ARN, or `UNKNOWN` when empty
pub fn schedule_name_from_arn(arn: &str) -> String {
    if arn.is_empty() {
        return UNKNOWN.to_string();
    }
    arn.rsplit('/').next().unwrap_or(arn).to_string()
}
