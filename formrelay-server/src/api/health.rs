//! Health Check API Handler
//!
//! Reports process liveness and whether outbound mail is configured, so a
//! probe can distinguish "down" from "up but unable to relay".

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::{AppState, MailState};

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    mail: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let mail = match state.mail {
        MailState::Ready(_) => "ready",
        MailState::Unavailable(_) => "unavailable",
    };

    (
        StatusCode::OK,
        Json(HealthStatus {
            status: "ok",
            mail,
        }),
    )
}
