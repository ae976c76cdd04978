//! Error types for the Formrelay client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when submitting a form
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the server
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered but rejected the submission
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The server answered with a body that is not the expected JSON shape
    #[error("Unparseable server response")]
    UnparseableResponse,

    /// The payload could not be serialized into a multipart form
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl ClientError {
    /// The one human-readable notice the UI shows for this outcome. Raw
    /// error codes never surface to the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            ClientError::Rejected(message) => message.clone(),
            ClientError::UnparseableResponse | ClientError::InvalidPayload(_) => {
                "An error occurred. Please try again.".to_string()
            }
        }
    }
}
