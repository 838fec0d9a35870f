use thiserror::Error;

/// Failures talking to the webhook. None of these reach the end user verbatim.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No webhook URL is configured.
    #[error("webhook URL is not configured")]
    NotConfigured,

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook did not answer within {ms}ms")]
    Timeout { ms: u64 },

    #[error("failed to sign payload: {0}")]
    Signing(String),

    #[error("failed to encode payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from [`ChatRelay::send_message`](crate::relay::ChatRelay::send_message).
#[derive(Debug, Error)]
pub enum RelayError {
    /// The message was empty after trimming; nothing was sent.
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Transport(#[from] TransportError),
}
