//! Enquire command handler
//!
//! Submits a contact enquiry through the same controller the contact form
//! uses, so CLI submissions pass the same gates. Only the name and message
//! are mandatory; when an email is given the server also sends a
//! confirmation to it.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::*;
use formrelay_client::contact::{ContactField, ContactForm};
use formrelay_client::{SubmissionClient, geo};

use crate::config::Config;

/// Arguments for the enquire command
#[derive(Args)]
pub struct EnquireArgs {
    /// Sender name
    #[arg(long)]
    name: String,

    /// Reply-to email address (optional, skips the confirmation email)
    #[arg(long)]
    email: Option<String>,

    /// Phone number, normalized to E.164 using the country's dial code
    #[arg(long)]
    phone: Option<String>,

    /// ISO 3166 country code for phone normalization (autodetected when omitted)
    #[arg(long)]
    country: Option<String>,

    /// Enquiry subject
    #[arg(long)]
    subject: Option<String>,

    /// Enquiry message
    #[arg(long)]
    message: String,
}

/// Handle the enquire command
pub async fn handle_enquire_command(args: EnquireArgs, config: &Config) -> Result<()> {
    let client = SubmissionClient::new(&config.server_url);
    let mut form = ContactForm::new();

    let country = match args.country {
        Some(country) => country,
        None => geo::detect_country(client.http()).await,
    };
    form.set_phone_country(&country);

    form.set_field(ContactField::Name, &args.name);
    form.set_field(ContactField::Message, &args.message);
    if let Some(email) = &args.email {
        form.set_field(ContactField::Email, email);
    }
    if let Some(phone) = &args.phone {
        form.set_field(ContactField::Phone, phone);
    }
    if let Some(subject) = &args.subject {
        form.set_field(ContactField::Subject, subject);
    }

    let enquiry = form.begin_submit().map_err(|err| {
        println!("{} {}", "✗".red(), err.to_string().red());
        for field in form.flagged_fields() {
            println!("  {} {:?}", "▸".yellow(), field);
        }
        anyhow!(err.to_string())
    })?;

    match client.submit_enquiry(&enquiry).await {
        Ok(()) => {
            form.handle_success();
            println!("{} {}", "✓".green(), "Enquiry sent".green());
            Ok(())
        }
        Err(err) => {
            let message = err.user_message();
            form.handle_failure(&message);
            println!("{} {}", "✗".red(), message.red());
            Err(err.into())
        }
    }
}
