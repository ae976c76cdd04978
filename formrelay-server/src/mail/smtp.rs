//! SMTP mailer implementation

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, MultiPart, SinglePart, header::ContentType},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};

use super::{MailError, Mailbox, Mailer, OutboundMessage};
use crate::config::MailConfig;

/// Mailer backed by an authenticated SMTP transport. One instance (one
/// session pool) serves both sends of a submission.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport from the loaded configuration.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let tls_params = TlsParameters::new(config.smtp_host.clone())
            .map_err(|e| MailError::Compose(format!("TLS configuration error: {}", e)))?;

        // Port 465 uses implicit TLS (SMTPS), other ports use STARTTLS
        let builder = if config.smtp_port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| MailError::Compose(format!("SMTP relay error: {}", e)))?
                .port(config.smtp_port)
                .tls(Tls::Wrapper(tls_params))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| MailError::Compose(format!("SMTP relay error: {}", e)))?
                .port(config.smtp_port)
                .tls(Tls::Required(tls_params))
        };

        let transport = builder
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

/// Only the address goes through the parser; the display name is carried
/// as-is, so names with commas or quotes ("Doe, Jane") stay deliverable.
fn to_lettre(mailbox: &Mailbox) -> Result<lettre::message::Mailbox, MailError> {
    let address = mailbox
        .address
        .parse::<lettre::Address>()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", mailbox.address, e)))?;
    Ok(lettre::message::Mailbox::new(mailbox.name.clone(), address))
}

fn build_message(message: &OutboundMessage) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(to_lettre(&message.from)?)
        .to(to_lettre(&message.to)?)
        .subject(&message.subject);

    if let Some(reply_to) = &message.reply_to {
        builder = builder.reply_to(to_lettre(reply_to)?);
    }

    let alternative = MultiPart::alternative()
        .singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_PLAIN)
                .body(message.text_body.clone()),
        )
        .singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(message.html_body.clone()),
        );

    let result = if message.attachments.is_empty() {
        builder.multipart(alternative)
    } else {
        let mut mixed = MultiPart::mixed().multipart(alternative);
        for attachment in &message.attachments {
            let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
                MailError::Compose(format!(
                    "Invalid attachment content type {}: {}",
                    attachment.content_type, e
                ))
            })?;
            mixed = mixed.singlepart(
                Attachment::new(attachment.file_name.clone())
                    .body(attachment.content.clone(), content_type),
            );
        }
        builder.multipart(mixed)
    };

    result.map_err(|e| MailError::Compose(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Send(e.to_string()))?;

        tracing::debug!("Sent \"{}\" to {}", message.subject, message.to.address);
        Ok(())
    }
}
