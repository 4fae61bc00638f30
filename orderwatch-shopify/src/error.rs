//! Error types for the Shopify order source.

/// Errors that can occur while talking to the Shopify Admin API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UpstreamError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    /// The API answered successfully but the body was not the expected JSON.
    #[error("undecodable upstream response from {endpoint}: {reason}")]
    Decode { endpoint: &'static str, reason: String },
}

impl UpstreamError {
    /// The upstream HTTP status, when the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }
}
