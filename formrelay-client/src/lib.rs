//! Formrelay HTTP Client
//!
//! The browser side of the lead-capture system, as a library: the multi-step
//! wizard state machine, phone normalization, IP geolocation, and the
//! multipart submission client that talks to the Formrelay server.
//!
//! # Example
//!
//! ```no_run
//! use formrelay_client::SubmissionClient;
//! use formrelay_core::domain::enquiry::Enquiry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SubmissionClient::new("http://localhost:8080");
//!
//!     let enquiry = Enquiry {
//!         name: "Jane Doe".to_string(),
//!         email: "jane@example.com".to_string(),
//!         message: "How much for a site survey?".to_string(),
//!         ..Default::default()
//!     };
//!
//!     match client.submit_enquiry(&enquiry).await {
//!         Ok(()) => println!("Sent"),
//!         Err(e) => println!("{}", e.user_message()),
//!     }
//! }
//! ```

pub mod contact;
pub mod error;
pub mod geo;
pub mod phone;
pub mod wizard;

pub use error::{ClientError, Result};

use formrelay_core::domain::application::CareerApplication;
use formrelay_core::domain::enquiry::Enquiry;
use formrelay_core::dto::submission::SubmissionResult;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

/// A file ready to be sent with a submission.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Everything a careers submission carries over the wire. The phone field
/// inside `application` is expected to be already normalized.
#[derive(Debug, Clone)]
pub struct CareersPayload {
    pub application: CareerApplication,
    pub cv: FilePayload,
    pub cover_letter: Option<FilePayload>,
}

/// HTTP client for the Formrelay submission endpoints
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SubmissionClient {
    /// Create a new submission client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom reqwest instance (timeouts, proxies).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The shared HTTP client, reused for the geolocation lookup.
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// POST a careers application.
    pub async fn submit_careers(&self, payload: &CareersPayload) -> Result<()> {
        let app = &payload.application;
        let mut form = Form::new()
            .text("fullName", app.full_name.clone())
            .text("email", app.email.clone())
            .text("phone", app.phone.clone())
            .text("location", app.location.clone())
            .text("department", app.department.clone())
            .text("position", app.position.clone())
            .text("experience", app.experience.clone())
            .text("qualification", app.qualification.clone())
            .text("linkedIn", app.linked_in.clone())
            .text("coverLetter", app.cover_letter.clone())
            .part("cvUpload", file_part(&payload.cv)?);

        if let Some(cover) = &payload.cover_letter {
            form = form.part("coverLetterUpload", file_part(cover)?);
        }

        self.post_form("/submit/careers", form).await
    }

    /// POST a contact enquiry.
    pub async fn submit_enquiry(&self, enquiry: &Enquiry) -> Result<()> {
        let form = Form::new()
            .text("name", enquiry.name.clone())
            .text("email", enquiry.email.clone())
            .text("phone", enquiry.phone.clone())
            .text("subject", enquiry.subject.clone())
            .text("message", enquiry.message.clone());

        self.post_form("/submit/enquiry", form).await
    }

    async fn post_form(&self, path: &str, form: Form) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).multipart(form).send().await?;

        // Status codes are not used for control flow; the body decides.
        let text = response.text().await?;
        interpret_response(&text)
    }
}

fn file_part(file: &FilePayload) -> Result<Part> {
    Part::bytes(file.data.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| ClientError::InvalidPayload(format!("{}: {}", file.content_type, e)))
}

/// Decide the submission outcome from the raw response body.
fn interpret_response(text: &str) -> Result<()> {
    let Ok(result) = serde_json::from_str::<SubmissionResult>(text) else {
        tracing::warn!("Unparseable submission response: {}", text);
        return Err(ClientError::UnparseableResponse);
    };

    if result.ok {
        Ok(())
    } else {
        Err(ClientError::Rejected(result.error.unwrap_or_else(|| {
            "An error occurred. Please try again.".to_string()
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = SubmissionClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_interpret_success() {
        assert!(interpret_response(r#"{"ok":true}"#).is_ok());
    }

    #[test]
    fn test_interpret_rejection_keeps_server_message() {
        let err = interpret_response(r#"{"ok":false,"error":"CV/Resume is required"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "CV/Resume is required");
    }

    #[test]
    fn test_interpret_rejection_without_message_is_generic() {
        let err = interpret_response(r#"{"ok":false}"#).unwrap_err();
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }

    #[test]
    fn test_interpret_garbage_is_unparseable() {
        let err = interpret_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::UnparseableResponse));
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }
}
