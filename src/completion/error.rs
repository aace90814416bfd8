//! Error types for the completion module.

use thiserror::Error;

/// Errors that can occur while generating a reply upstream.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// API credential required but not configured.
    #[error("CEREBRAS_API_KEY is not set")]
    MissingApiKey,

    /// HTTP transport failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, when one could be read.
        body: String,
    },

    /// The response decoded but did not carry the expected reply content.
    #[error("completion response contained no choices")]
    MalformedResponse,
}

impl CompletionError {
    /// Whether this failure is fixable by operator configuration alone.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}
