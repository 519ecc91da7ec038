//! Notification delivery — the seam between formatting and transport
//!
//! A `Notifier` posts one webhook payload. The HTTP implementation is
//! used in production; the in-memory one records payloads for tests and
//! dry runs. `deliver` wraps either in the best-effort policy: failures
//! are logged and never reach the caller.

use crate::error::Result;
use crate::message::{NotificationMessage, WebhookPayload};
use async_trait::async_trait;

pub mod memory;
pub mod webhook;

pub use memory::MemoryNotifier;
pub use webhook::WebhookNotifier;

/// Core trait for notification backends
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post one payload; a single attempt, no retry
    async fn send(&self, payload: &WebhookPayload) -> Result<()>;

    /// Backend name (e.g. "webhook", "memory")
    fn name(&self) -> &str;
}

/// Send a message and swallow any failure
///
/// Returns whether the backend accepted the payload, for logging and
/// tests only.
pub async fn deliver(notifier: &dyn Notifier, message: NotificationMessage) -> bool {
    let payload = WebhookPayload::from(message);
    match notifier.send(&payload).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                notifier = notifier.name(),
                error = %e,
                "Error sending notification"
            );
            false
        }
    }
}
