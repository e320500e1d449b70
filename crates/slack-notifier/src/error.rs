//! Error types for message delivery.

use thiserror::Error;

/// Errors that can occur when delivering a message.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status
    #[error("Slack returned {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Sink is missing required configuration
    #[error("Sink not configured: {0}")]
    NotConfigured(String),
}
