//! Contact enquiry endpoint
//!
//! Same relay shape as the careers endpoint, without file handling. The
//! email address is optional; when it is missing the confirmation send is
//! skipped and the submission still succeeds.

use axum::{Json, extract::Multipart, extract::State};
use formrelay_core::domain::enquiry::Enquiry;
use formrelay_core::dto::submission::SubmissionResult;

use super::error::{ApiError, ApiResult};
use super::forms::FormBody;
use crate::api::AppState;
use crate::mail::{
    INFO_ADDRESS, Mailbox, NO_REPLY_ADDRESS, ORG_NAME, OutboundMessage, templates,
};

/// POST /submit/enquiry
pub async fn submit_enquiry(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<SubmissionResult>> {
    let mailer = state.mailer()?;

    let form = FormBody::read(multipart).await?;

    let enquiry = Enquiry {
        name: form.text("name"),
        email: form.text("email"),
        phone: form.text("phone"),
        subject: form.text("subject"),
        message: form.text("message"),
    }
    .sanitized();

    if !enquiry.has_required_fields() {
        return Err(ApiError::Validation(
            "All required fields must be filled".to_string(),
        ));
    }

    if !enquiry.has_valid_email() {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }

    tracing::info!("Enquiry from {}", enquiry.name);

    mailer.send(&operator_message(&enquiry)).await?;

    // No address means no confirmation; still a successful submission.
    if !enquiry.email.is_empty() {
        mailer.send(&confirmation_message(&enquiry)).await?;
    }

    Ok(Json(SubmissionResult::ok()))
}

/// Notification to the info desk, reply-to echoing the enquirer when an
/// address was given.
fn operator_message(enquiry: &Enquiry) -> OutboundMessage {
    let content = templates::enquiry_operator(enquiry);

    let reply_to = (!enquiry.email.is_empty())
        .then(|| Mailbox::named(enquiry.email.clone(), enquiry.name.clone()));

    OutboundMessage {
        from: Mailbox::named(NO_REPLY_ADDRESS, ORG_NAME),
        reply_to,
        to: Mailbox::new(INFO_ADDRESS),
        subject: content.subject,
        html_body: content.html,
        text_body: content.text,
        attachments: Vec::new(),
    }
}

/// Acknowledgment to the enquirer; no reply-to, no attachments.
fn confirmation_message(enquiry: &Enquiry) -> OutboundMessage {
    let content = templates::enquiry_confirmation(enquiry);

    OutboundMessage {
        from: Mailbox::named(NO_REPLY_ADDRESS, ORG_NAME),
        reply_to: None,
        to: Mailbox::named(enquiry.email.clone(), enquiry.name.clone()),
        subject: content.subject,
        html_body: content.html,
        text_body: content.text,
        attachments: Vec::new(),
    }
}
