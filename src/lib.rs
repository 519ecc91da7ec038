//! # ecs-scaling-notifier
//!
//! Webhook notifications for ECS service scaling events.
//!
//! ## Overview
//!
//! Three independent handlers turn upstream event envelopes into a
//! chat-webhook attachment and post it once, best effort:
//!
//! - **Batch audit notifier** — a queued batch of audit events becomes one
//!   summary message ([`handler::handle_batch`])
//! - **Single audit notifier** — each pub/sub audit event becomes one
//!   detailed message ([`handler::handle_audit_event`])
//! - **Schedule-state notifier** — each scheduler state change becomes one
//!   message ([`handler::handle_schedule_state`])
//!
//! ## Quick Start
//!
//! ```rust
//! use ecs_scaling_notifier::{handler, Acknowledgement, MemoryNotifier, NotifierConfig, QueueBatch};
//!
//! # async fn example() {
//! let config = NotifierConfig::new("https://hooks.example.com/services/T0/B0/x", "prod");
//! let notifier = MemoryNotifier::default();
//!
//! let ack = handler::handle_batch(&notifier, &config, QueueBatch::default()).await;
//! assert_eq!(ack, Acknowledgement::OK);
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **extract** — typed records from loosely shaped events, with defaults
//! - **summary** / **message** — attachment formatting
//! - **Notifier** trait — delivery backend (HTTP webhook, in-memory)
//! - **handler** — per-source invocation entry points that never fail

pub mod config;
pub mod delivery;
pub mod error;
pub mod extract;
pub mod handler;
pub mod logging;
pub mod message;
pub mod summary;
pub mod types;

// Re-export core types
pub use config::NotifierConfig;
pub use delivery::{deliver, MemoryNotifier, Notifier, WebhookNotifier};
pub use error::{NotifierError, Result};
pub use extract::{
    schedule_name_from_arn, DesiredCount, ExecutionState, ScalingAction, ScalingRecord,
    ScheduleRecord,
};
pub use message::{Color, Field, NotificationMessage, WebhookPayload};
pub use summary::{build_summary_message, BatchOutcome};
pub use types::{Acknowledgement, QueueBatch, QueueRecord, TopicEnvelope, TopicMessage, TopicRecord};
