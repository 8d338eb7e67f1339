//! Backend Errors

use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response body
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A body arrived but is not the JSON we expect
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The backend answered `ok: false`
    #[error("backend rejected the lead")]
    Rejected,
}

impl ApiError {
    pub fn transport(url: &str, message: impl Into<String>) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// Message shown to the user when creating a lead fails
    pub fn create_notice(&self) -> &'static str {
        match self {
            ApiError::Rejected => "Failed to create lead",
            ApiError::Transport { .. } | ApiError::Decode(_) => "Error creating lead",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
