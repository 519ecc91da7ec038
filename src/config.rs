//! Notifier configuration
//!
//! Read once per process from the environment:
//!
//! - `SLACK_WEBHOOK_URL` — destination webhook (required)
//! - `ENVIRONMENT` — deployment label shown in messages (default `unknown`)

use crate::error::{NotifierError, Result};
use serde::Deserialize;

/// Runtime configuration shared by all three handlers
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    /// Incoming-webhook URL that receives every notification
    pub slack_webhook_url: String,

    /// Deployment environment label (e.g. "prod", "staging")
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "unknown".to_string()
}

impl NotifierConfig {
    /// Build a config directly, bypassing the environment
    pub fn new(slack_webhook_url: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            slack_webhook_url: slack_webhook_url.into(),
            environment: environment.into(),
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        let config: Self = envy::from_env()
            .map_err(|e| NotifierError::Config(format!("failed to read environment: {}", e)))?;
        config.validate()
    }

    /// Load from an explicit list of `(NAME, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)
            .map_err(|e| NotifierError::Config(format!("failed to read environment: {}", e)))?;
        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.slack_webhook_url.trim().is_empty() {
            return Err(NotifierError::Config(
                "SLACK_WEBHOOK_URL must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}
