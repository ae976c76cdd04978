//! API Error Handling
//!
//! Unified error type and response conversion for the submission endpoints.
//! Every failure maps to the JSON result shape plus a status for its class:
//! 400 for caller-supplied input errors, 405 for wrong method, 500 for
//! configuration, file handling, and transport errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_core::dto::submission::SubmissionResult;

use crate::mail::MailError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    ConfigurationMissing(String),
    Validation(String),
    SniffMismatch(String),
    FileMove(String),
    TransportSend(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            ApiError::ConfigurationMissing(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::SniffMismatch(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::FileMove(msg) => {
                tracing::error!("File handling error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::TransportSend(msg) => {
                tracing::error!("Mail transport error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(SubmissionResult::error(message))).into_response()
    }
}

impl From<MailError> for ApiError {
    fn from(err: MailError) -> Self {
        ApiError::TransportSend(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback for non-POST methods on the submission routes.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
