//! In-memory notifier for development and testing
//!
//! Records every accepted payload. A failing instance rejects every
//! send, which exercises the best-effort path without a network.

use super::Notifier;
use crate::error::{NotifierError, Result};
use crate::message::WebhookPayload;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Notifier that keeps payloads in a `Vec`
#[derive(Default)]
pub struct MemoryNotifier {
    sent: Arc<RwLock<Vec<WebhookPayload>>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl MemoryNotifier {
    /// A notifier whose every send fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Payloads accepted so far, oldest first
    pub async fn sent(&self) -> Vec<WebhookPayload> {
        self.sent.read().await.clone()
    }

    /// Number of send attempts, including failed ones
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, payload: &WebhookPayload) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(NotifierError::Delivery {
                host: "memory".to_string(),
                reason: "notifier configured to fail".to_string(),
            });
        }

        self.sent.write().await.push(payload.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
