//! Outbound mail
//!
//! Every accepted submission produces exactly two messages: an operator
//! notification and a submitter confirmation. Each is built as an
//! independent [`OutboundMessage`] value and handed to a stateless
//! [`Mailer::send`], so nothing from the first message can leak into the
//! second.

pub mod smtp;
pub mod templates;

use async_trait::async_trait;
use thiserror::Error;

/// Fixed sender identities. These are deliberately not configurable; the
/// deployment owns the domain and the addresses are part of the product.
pub const NO_REPLY_ADDRESS: &str = "no-reply@northvalegroup.com";
pub const HR_ADDRESS: &str = "hr@northvalegroup.com";
pub const INFO_ADDRESS: &str = "info@northvalegroup.com";
pub const ORG_NAME: &str = "Northvale Group";
pub const CAREERS_FROM_NAME: &str = "Northvale Group Careers";

/// Mail sending error
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build email: {0}")]
    Compose(String),

    #[error("Failed to send email: {0}")]
    Send(String),
}

/// An address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub address: String,
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    pub fn named(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }
}

/// A file attached to an outbound message, read from its temp location.
#[derive(Debug, Clone)]
pub struct MessageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// A fully composed message, independent of any transport state.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub from: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub to: Mailbox,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub attachments: Vec<MessageAttachment>,
}

/// Transport abstraction. The SMTP implementation is the production path;
/// tests substitute a recorder.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}
