use reqwest::StatusCode;

/// Errors raised while talking to a hosted classification endpoint.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The endpoint could not be reached, or the call timed out
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API key is missing or was rejected
    #[error("Authorization failed: {0}")]
    Auth(String),
    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The service answered with a non-success status other than an auth failure
    #[error("Service error ({status}): {message}")]
    Service { status: StatusCode, message: String },
}

impl InferenceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
