use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
