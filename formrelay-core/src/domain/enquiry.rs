//! Contact enquiry domain type

use serde::{Deserialize, Serialize};

use crate::domain::{email, text};

/// Fields of a general contact enquiry.
///
/// Only the name and message are mandatory. The email address is optional
/// but must match the address grammar when supplied; without one the
/// confirmation email is simply skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl Enquiry {
    pub fn sanitized(mut self) -> Self {
        self.name = text::sanitize_single_line(&self.name);
        self.email = text::sanitize_single_line(&self.email);
        self.phone = text::sanitize_single_line(&self.phone);
        self.subject = text::sanitize_single_line(&self.subject);
        self.message = text::sanitize_multi_line(&self.message);
        self
    }

    pub fn has_required_fields(&self) -> bool {
        !(self.name.is_empty() || self.message.is_empty())
    }

    /// Valid when absent or well-formed.
    pub fn has_valid_email(&self) -> bool {
        self.email.is_empty() || email::is_valid_email(&self.email)
    }
}
