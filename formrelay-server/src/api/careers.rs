//! Careers submission endpoint
//!
//! Authoritative validation and relay of a job application: required fields,
//! email grammar, the two-stage upload type check, then the operator
//! notification and applicant confirmation sent through one transport.
//! The temp files drop at the end of the handler on every path.

use axum::{Json, extract::Multipart, extract::State};
use formrelay_core::domain::application::CareerApplication;
use formrelay_core::dto::submission::SubmissionResult;

use super::error::{ApiError, ApiResult};
use super::forms::FormBody;
use crate::api::AppState;
use crate::mail::{
    CAREERS_FROM_NAME, HR_ADDRESS, Mailbox, MessageAttachment, NO_REPLY_ADDRESS, ORG_NAME,
    OutboundMessage, templates,
};
use crate::upload::{StoredUpload, UploadLabel, validate_and_store};

/// POST /submit/careers
pub async fn submit_careers(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<SubmissionResult>> {
    // Configuration problems surface before the body is touched.
    let mailer = state.mailer()?;

    let form = FormBody::read(multipart).await?;

    let application = CareerApplication {
        full_name: form.text("fullName"),
        email: form.text("email"),
        phone: form.text("phone"),
        location: form.text("location"),
        department: form.text("department"),
        position: form.text("position"),
        experience: form.text("experience"),
        qualification: form.text("qualification"),
        linked_in: form.text("linkedIn"),
        cover_letter: form.text("coverLetter"),
    }
    .sanitized();

    if !application.has_required_fields() {
        return Err(ApiError::Validation(
            "All required fields must be filled".to_string(),
        ));
    }

    if !application.has_valid_email() {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }

    let cv_raw = form
        .file("cvUpload")
        .ok_or_else(|| ApiError::Validation("CV/Resume is required".to_string()))?;
    let cv = validate_and_store(cv_raw, UploadLabel::Cv)?;

    let cover_letter = match form.file("coverLetterUpload") {
        Some(raw) => Some(validate_and_store(raw, UploadLabel::CoverLetter)?),
        None => None,
    };

    tracing::info!(
        "Careers submission from {} for {} / {}",
        application.email,
        application.department,
        application.position
    );

    let operator = operator_message(&application, &cv, cover_letter.as_ref())?;
    let confirmation = confirmation_message(&application);

    mailer.send(&operator).await?;
    mailer.send(&confirmation).await?;

    Ok(Json(SubmissionResult::ok()))
}

fn attachment(upload: &StoredUpload) -> ApiResult<MessageAttachment> {
    let content = upload.read().map_err(|e| {
        ApiError::Internal(format!("Failed to read stored upload: {}", e))
    })?;
    Ok(MessageAttachment {
        file_name: upload.file_name.clone(),
        content_type: upload.kind.mime_type().to_string(),
        content,
    })
}

/// Notification to HR, reply-to pointed at the applicant, CV (and cover
/// letter when present) attached.
fn operator_message(
    application: &CareerApplication,
    cv: &StoredUpload,
    cover_letter: Option<&StoredUpload>,
) -> ApiResult<OutboundMessage> {
    let content = templates::careers_operator(
        application,
        &cv.file_name,
        cover_letter.map(|c| c.file_name.as_str()),
    );

    let mut attachments = vec![attachment(cv)?];
    if let Some(cover) = cover_letter {
        attachments.push(attachment(cover)?);
    }

    Ok(OutboundMessage {
        from: Mailbox::named(NO_REPLY_ADDRESS, CAREERS_FROM_NAME),
        reply_to: Some(Mailbox::named(
            application.email.clone(),
            application.full_name.clone(),
        )),
        to: Mailbox::new(HR_ADDRESS),
        subject: content.subject,
        html_body: content.html,
        text_body: content.text,
        attachments,
    })
}

/// One-way confirmation to the applicant; reply-to forced to the no-reply
/// address, no attachments.
fn confirmation_message(application: &CareerApplication) -> OutboundMessage {
    let content = templates::careers_confirmation(application);

    OutboundMessage {
        from: Mailbox::named(NO_REPLY_ADDRESS, ORG_NAME),
        reply_to: Some(Mailbox::named(NO_REPLY_ADDRESS, "Do Not Reply")),
        to: Mailbox::named(application.email.clone(), application.full_name.clone()),
        subject: content.subject,
        html_body: content.html,
        text_body: content.text,
        attachments: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::spawn_app;
    use crate::api::MailState;
    use formrelay_core::domain::attachment::MAX_UPLOAD_BYTES;
    use formrelay_core::dto::submission::SubmissionResult;
    use reqwest::multipart::{Form, Part};

    fn pdf_bytes(size: usize) -> Vec<u8> {
        let mut data = b"%PDF-1.7\n".to_vec();
        data.resize(size, 0);
        data
    }

    fn text_fields(form: Form) -> Form {
        form.text("fullName", "Jane Doe")
            .text("email", "jane@example.com")
            .text("phone", "+2348030000000")
            .text("location", "Jos")
            .text("department", "Construction")
            .text("position", "Site Engineer")
            .text("experience", "5 years")
            .text("qualification", "BSc Civil Engineering")
    }

    fn cv_part(data: Vec<u8>, mime: &str) -> Part {
        Part::bytes(data)
            .file_name("cv.pdf")
            .mime_str(mime)
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let (addr, _mailer) = spawn_app(None).await;

        let response = reqwest::get(format!("http://{}/submit/careers", addr))
            .await
            .unwrap();
        assert_eq!(response.status(), 405);

        let result: SubmissionResult = response.json().await.unwrap();
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some("Method not allowed"));
    }

    #[tokio::test]
    async fn test_missing_configuration_is_500() {
        let addr = super::super::testing::spawn_app_with(MailState::Unavailable(
            "Mail configuration file not found".to_string(),
        ))
        .await;

        let form = text_fields(Form::new());
        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(
            result.error.as_deref(),
            Some("Mail configuration file not found")
        );
    }

    #[tokio::test]
    async fn test_missing_required_field_is_400() {
        let (addr, mailer) = spawn_app(None).await;

        // position left out
        let form = Form::new()
            .text("fullName", "Jane Doe")
            .text("email", "jane@example.com")
            .text("phone", "+2348030000000")
            .text("location", "Jos")
            .text("department", "Construction")
            .text("experience", "5 years")
            .text("qualification", "BSc")
            .part("cvUpload", cv_part(pdf_bytes(64), "application/pdf"));

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(
            result.error.as_deref(),
            Some("All required fields must be filled")
        );
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_cv_is_400() {
        let (addr, mailer) = spawn_app(None).await;

        let form = text_fields(Form::new());
        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(result.error.as_deref(), Some("CV/Resume is required"));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_email_is_400() {
        let (addr, _mailer) = spawn_app(None).await;

        let form = Form::new()
            .text("fullName", "Jane Doe")
            .text("email", "not-an-address")
            .text("phone", "+2348030000000")
            .text("location", "Jos")
            .text("department", "Construction")
            .text("position", "Site Engineer")
            .text("experience", "5 years")
            .text("qualification", "BSc")
            .part("cvUpload", cv_part(pdf_bytes(64), "application/pdf"));

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(result.error.as_deref(), Some("Invalid email address"));
    }

    #[tokio::test]
    async fn test_relabeled_png_rejected_by_sniff() {
        let (addr, mailer) = spawn_app(None).await;

        let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let form =
            text_fields(Form::new()).part("cvUpload", cv_part(png, "application/pdf"));

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid file format. CV must be a genuine PDF or Word document")
        );
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_declared_png_rejected_before_sniff() {
        let (addr, _mailer) = spawn_app(None).await;

        let form =
            text_fields(Form::new()).part("cvUpload", cv_part(pdf_bytes(64), "image/png"));

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(
            result.error.as_deref(),
            Some("CV must be a PDF or Word document")
        );
    }

    #[tokio::test]
    async fn test_size_boundary() {
        let (addr, _mailer) = spawn_app(None).await;
        let client = reqwest::Client::new();

        let exactly = text_fields(Form::new()).part(
            "cvUpload",
            cv_part(pdf_bytes(MAX_UPLOAD_BYTES as usize), "application/pdf"),
        );
        let response = client
            .post(format!("http://{}/submit/careers", addr))
            .multipart(exactly)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let over = text_fields(Form::new()).part(
            "cvUpload",
            cv_part(pdf_bytes(MAX_UPLOAD_BYTES as usize + 1), "application/pdf"),
        );
        let response = client
            .post(format!("http://{}/submit/careers", addr))
            .multipart(over)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let result: SubmissionResult = response.json().await.unwrap();
        assert_eq!(
            result.error.as_deref(),
            Some("CV file size must be less than 5MB")
        );
    }

    #[tokio::test]
    async fn test_valid_submission_sends_two_messages() {
        let (addr, mailer) = spawn_app(None).await;

        let form = text_fields(Form::new())
            .text("linkedIn", "https://linkedin.example.com/in/jane")
            .part("cvUpload", cv_part(pdf_bytes(1024), "application/pdf"));

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let result: SubmissionResult = response.json().await.unwrap();
        assert!(result.ok);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);

        let operator = &sent[0];
        assert_eq!(operator.to.address, "hr@northvalegroup.com");
        assert_eq!(
            operator.reply_to.as_ref().unwrap().address,
            "jane@example.com"
        );
        assert_eq!(operator.attachments.len(), 1);
        assert_eq!(operator.attachments[0].file_name, "cv.pdf");
        assert!(operator.subject.contains("Site Engineer"));

        let confirmation = &sent[1];
        assert_eq!(confirmation.to.address, "jane@example.com");
        assert_eq!(
            confirmation.reply_to.as_ref().unwrap().address,
            "no-reply@northvalegroup.com"
        );
        assert!(confirmation.attachments.is_empty());
        assert_eq!(confirmation.subject, "Application Received — Northvale Group");
    }

    #[tokio::test]
    async fn test_cover_letter_upload_attached_to_operator_only() {
        let (addr, mailer) = spawn_app(None).await;

        let cover = Part::bytes(pdf_bytes(128))
            .file_name("cover.pdf")
            .mime_str("application/pdf")
            .unwrap();
        let form = text_fields(Form::new())
            .part("cvUpload", cv_part(pdf_bytes(1024), "application/pdf"))
            .part("coverLetterUpload", cover);

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let sent = mailer.sent();
        assert_eq!(sent[0].attachments.len(), 2);
        assert_eq!(sent[0].attachments[1].file_name, "cover.pdf");
        assert!(sent[1].attachments.is_empty());
    }

    /// Names of staged-upload temp files currently present.
    fn staged_temp_files() -> std::collections::HashSet<String> {
        std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("cv_") || name.starts_with("cover_"))
            .collect()
    }

    #[tokio::test]
    async fn test_transport_failure_on_second_send_is_500() {
        // first send succeeds, second fails; whole submission reported failed
        let (addr, mailer) = spawn_app(Some(1)).await;
        let before = staged_temp_files();

        let cover = Part::bytes(pdf_bytes(128))
            .file_name("cover.pdf")
            .mime_str("application/pdf")
            .unwrap();
        let form = text_fields(Form::new())
            .part("cvUpload", cv_part(pdf_bytes(64), "application/pdf"))
            .part("coverLetterUpload", cover);

        let response = reqwest::Client::new()
            .post(format!("http://{}/submit/careers", addr))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);

        let result: SubmissionResult = response.json().await.unwrap();
        assert!(!result.ok);
        assert_eq!(mailer.sent().len(), 1);

        // no residual staged files after the failed second send; re-check
        // once so files staged briefly by concurrently running tests do not
        // count
        let mut residual: Vec<String> = staged_temp_files()
            .difference(&before)
            .cloned()
            .collect();
        if !residual.is_empty() {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            let now = staged_temp_files();
            residual.retain(|name| now.contains(name));
        }
        assert!(residual.is_empty(), "leftover temp files: {:?}", residual);
    }
}
