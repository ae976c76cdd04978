//! API Module
//!
//! HTTP layer for the submission server. Each submodule handles one
//! endpoint; shared multipart plumbing lives in `forms`.

pub mod careers;
pub mod enquiry;
pub mod error;
pub mod forms;
pub mod health;
#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::mail::Mailer;
use error::{ApiError, ApiResult};

/// Two uploads of at most 5 MiB each, plus text fields and framing.
const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

/// Outcome of loading the mail configuration at startup. When unavailable,
/// the submission endpoints answer with a configuration error; nothing else
/// about the request is processed.
#[derive(Clone)]
pub enum MailState {
    Ready(Arc<dyn Mailer>),
    Unavailable(String),
}

#[derive(Clone)]
pub struct AppState {
    mail: MailState,
}

impl AppState {
    pub fn new(mail: MailState) -> Self {
        Self { mail }
    }

    /// The mailer, or the configuration error recorded at startup.
    pub fn mailer(&self) -> ApiResult<Arc<dyn Mailer>> {
        match &self.mail {
            MailState::Ready(mailer) => Ok(Arc::clone(mailer)),
            MailState::Unavailable(reason) => {
                Err(ApiError::ConfigurationMissing(reason.clone()))
            }
        }
    }
}

/// Create the main router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Submission endpoints; anything but POST gets a JSON 405
        .route(
            "/submit/careers",
            post(careers::submit_careers).fallback(error::method_not_allowed),
        )
        .route(
            "/submit/enquiry",
            post(enquiry::submit_enquiry).fallback(error::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
        // the form is posted from the browser, from any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
