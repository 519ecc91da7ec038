//! Error types for ecs-scaling-notifier

use thiserror::Error;

/// Errors that can occur while turning an event into a notification
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Configuration error (missing webhook URL, bad environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record arrived without the message body it should carry
    #[error("Record has no message body: {0}")]
    MissingBody(String),

    /// Transport-level failure while posting to the webhook
    #[error("Failed to deliver notification to '{host}': {reason}")]
    Delivery {
        host: String,
        reason: String,
    },

    /// The webhook answered with a non-2xx status
    #[error("Webhook rejected notification with status {status}: {body}")]
    Rejected {
        status: u16,
        body: String,
    },
}

/// Result type alias for notifier operations
pub type Result<T> = std::result::Result<T, NotifierError>;
