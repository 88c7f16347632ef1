use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
///
/// Nothing is retried; every failure surfaces to the caller, which decides
/// whether to show it, fall back to a default, or carry on.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: connection refused, DNS, timeout, TLS.
    #[error("could not reach the shopping backend at {base_url}: {source}")]
    Transport {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("API error: {status} {status_text} ({url})")]
    HttpStatus {
        status: u16,
        status_text: String,
        url: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ClientError {
    /// HTTP status code, when the backend responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
