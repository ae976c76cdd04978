//! Single-step contact form controller
//!
//! Much smaller sibling of [`crate::wizard`]: one step, no files, the same
//! email-grammar validation, phone normalization, and submit discipline.
//! The UI owns the same timers (invalid-flag clear, delayed success reset).

use formrelay_core::domain::email;
use formrelay_core::domain::enquiry::Enquiry;
use thiserror::Error;

use crate::phone;
use crate::wizard::Notice;

pub const SEND_IDLE_LABEL: &str = "Send Message";
pub const SEND_IN_FLIGHT_LABEL: &str = "Sending...";

pub const SENT_NOTICE: &str = "Message sent successfully! We will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    Incomplete { invalid: Vec<ContactField> },

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

/// Contact form state. Only the name and message are required; the email
/// must match the address grammar when present.
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    phone_country: String,
    subject: String,
    message: String,
    flagged: Vec<ContactField>,
    notice: Option<Notice>,
    send: SendControl,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            phone_country: crate::geo::FALLBACK_COUNTRY.to_string(),
            subject: String::new(),
            message: String::new(),
            flagged: Vec::new(),
            notice: None,
            send: SendControl {
                enabled: true,
                label: SEND_IDLE_LABEL,
            },
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: &str) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.to_string();
    }

    pub fn set_phone_country(&mut self, country: &str) {
        self.phone_country = country.to_ascii_uppercase();
    }

    pub fn flagged_fields(&self) -> &[ContactField] {
        &self.flagged
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn send_control(&self) -> &SendControl {
        &self.send
    }

    /// Clear the transient invalid-field flags, on the same fixed timer the
    /// wizard uses.
    pub fn clear_invalid_flags(&mut self) {
        self.flagged.clear();
    }

    pub fn validate(&self) -> Vec<ContactField> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(ContactField::Name);
        }
        if !self.email.trim().is_empty() && !email::is_valid_email(self.email.trim()) {
            invalid.push(ContactField::Email);
        }
        if self.message.trim().is_empty() {
            invalid.push(ContactField::Message);
        }
        invalid
    }

    /// Validate, disable the send control, and assemble the enquiry with the
    /// normalized phone number.
    pub fn begin_submit(&mut self) -> Result<Enquiry, ContactError> {
        if !self.send.enabled {
            return Err(ContactError::SubmissionInFlight);
        }

        let invalid = self.validate();
        if !invalid.is_empty() {
            self.flagged = invalid.clone();
            self.notice = Some(Notice::Error(
                ContactError::Incomplete { invalid: vec![] }.to_string(),
            ));
            return Err(ContactError::Incomplete { invalid });
        }

        let phone = if self.phone.trim().is_empty() {
            String::new()
        } else {
            phone::normalize(&self.phone_country, &self.phone)
                .unwrap_or_else(|| self.phone.trim().to_string())
        };

        self.send = SendControl {
            enabled: false,
            label: SEND_IN_FLIGHT_LABEL,
        };

        Ok(Enquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone,
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
        .sanitized())
    }

    /// Show the success notice and reset the fields. The control returns to
    /// idle via [`Self::finish_success_reset`] after the fixed delay.
    pub fn handle_success(&mut self) {
        let country = self.phone_country.clone();
        *self = ContactForm::new();
        self.phone_country = country;
        self.notice = Some(Notice::Success(SENT_NOTICE.to_string()));
        self.send = SendControl {
            enabled: false,
            label: SEND_IN_FLIGHT_LABEL,
        };
    }

    pub fn finish_success_reset(&mut self) {
        self.notice = None;
        self.send = SendControl {
            enabled: true,
            label: SEND_IDLE_LABEL,
        };
    }

    /// Any failure restores the idle control immediately; field values are
    /// kept for a retry.
    pub fn handle_failure(&mut self, message: &str) {
        self.notice = Some(Notice::Error(message.to_string()));
        self.send = SendControl {
            enabled: true,
            label: SEND_IDLE_LABEL,
        };
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
