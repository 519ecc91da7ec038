//! HTTP webhook notifier
//!
//! Holds one `reqwest::Client` for the life of the process so that
//! warm invocations reuse pooled connections. No timeout or retry is
//! configured; the hosting runtime bounds each invocation.

use super::Notifier;
use crate::error::{NotifierError, Result};
use crate::message::WebhookPayload;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Posts payloads as JSON to a fixed webhook URL
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    /// Host part of the URL; the full URL embeds a secret and is never logged
    host: String,
}

impl WebhookNotifier {
    /// Create a notifier with a fresh HTTP client
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a notifier around an existing client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        let url = url.into();
        let host = reqwest::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "webhook".to_string());
        Self { client, url, host }
    }

    /// Host the notifier posts to
    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, payload: &WebhookPayload) -> Result<()> {
        let body = serde_json::to_vec(payload)?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| NotifierError::Delivery {
                host: self.host.clone(),
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifierError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            host = %self.host,
            status = status.as_u16(),
            "Slack notification sent"
        );

        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}
