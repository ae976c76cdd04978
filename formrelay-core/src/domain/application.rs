//! Careers application domain type

use serde::{Deserialize, Serialize};

use crate::domain::{email, text};

/// Text fields of a careers application.
///
/// File attachments travel separately; this struct carries only the values
/// that end up interpolated into the outbound emails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub department: String,
    pub position: String,
    pub experience: String,
    pub qualification: String,
    /// Optional LinkedIn profile URL.
    pub linked_in: String,
    /// Optional free-text cover letter.
    pub cover_letter: String,
}

impl CareerApplication {
    /// Apply the single-line / multi-line sanitization rules to every field.
    pub fn sanitized(mut self) -> Self {
        self.full_name = text::sanitize_single_line(&self.full_name);
        self.email = text::sanitize_single_line(&self.email);
        self.phone = text::sanitize_single_line(&self.phone);
        self.location = text::sanitize_single_line(&self.location);
        self.department = text::sanitize_single_line(&self.department);
        self.position = text::sanitize_single_line(&self.position);
        self.experience = text::sanitize_single_line(&self.experience);
        self.qualification = text::sanitize_single_line(&self.qualification);
        self.linked_in = text::sanitize_single_line(&self.linked_in);
        self.cover_letter = text::sanitize_multi_line(&self.cover_letter);
        self
    }

    /// All mandatory fields present. LinkedIn and the cover letter text are
    /// optional.
    pub fn has_required_fields(&self) -> bool {
        !(self.full_name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.location.is_empty()
            || self.department.is_empty()
            || self.position.is_empty()
            || self.experience.is_empty()
            || self.qualification.is_empty())
    }

    pub fn has_valid_email(&self) -> bool {
        email::is_valid_email(&self.email)
    }
}
