//! Invocation handlers, one per upstream event shape
//!
//! Each handler is infallible: per-record and delivery errors are logged
//! and the fixed `Acknowledgement::OK` is always returned.

pub mod batch;
pub mod schedule;
pub mod single;

pub use batch::handle_batch;
pub use schedule::handle_schedule_state;
pub use single::handle_audit_event;

use crate::error::{NotifierError, Result};
use crate::types::TopicRecord;

/// Borrow the JSON message carried by a topic record
fn topic_message(record: &TopicRecord) -> Result<&str> {
    record.sns.message.as_deref().ok_or_else(|| {
        NotifierError::MissingBody(record.sns.message_id.clone().unwrap_or_else(|| "-".to_string()))
    })
}
