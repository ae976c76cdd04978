//! Apply command handler
//!
//! Walks the career application wizard with the values given on the command
//! line, then submits the resulting payload. Validation failures print the
//! same messages the form shows, with the offending fields listed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::*;
use formrelay_client::wizard::{FieldId, SelectedFile, TOTAL_STEPS, Wizard, WizardError};
use formrelay_client::{SubmissionClient, geo};

use crate::config::Config;

/// Arguments for the apply command
#[derive(Args)]
pub struct ApplyArgs {
    /// Applicant full name
    #[arg(long)]
    name: String,

    /// Applicant email address
    #[arg(long)]
    email: String,

    /// Phone number, normalized to E.164 using the country's dial code
    #[arg(long)]
    phone: String,

    /// ISO 3166 country code for phone normalization (autodetected when omitted)
    #[arg(long)]
    country: Option<String>,

    /// Current location
    #[arg(long)]
    location: String,

    /// Department applied to (see `formrelay positions`)
    #[arg(long)]
    department: String,

    /// Position applied for
    #[arg(long)]
    position: String,

    /// Years of experience
    #[arg(long)]
    experience: String,

    /// Highest qualification
    #[arg(long)]
    qualification: String,

    /// Path to the CV (PDF, DOC, or DOCX, at most 5MB)
    #[arg(long)]
    cv: PathBuf,

    /// LinkedIn profile URL
    #[arg(long)]
    linkedin: Option<String>,

    /// Cover letter text
    #[arg(long)]
    cover_letter: Option<String>,

    /// Path to a cover letter document (same rules as the CV)
    #[arg(long)]
    cover_letter_file: Option<PathBuf>,
}

/// Handle the apply command
pub async fn handle_apply_command(args: ApplyArgs, config: &Config) -> Result<()> {
    let client = SubmissionClient::new(&config.server_url);
    let mut wizard = Wizard::new();

    let country = match args.country {
        Some(country) => country,
        None => geo::detect_country(client.http()).await,
    };
    wizard.set_phone_country(&country);

    wizard.set_text(FieldId::FullName, &args.name);
    wizard.set_text(FieldId::Email, &args.email);
    wizard.set_text(FieldId::Phone, &args.phone);
    wizard.set_text(FieldId::Location, &args.location);

    wizard.set_department(&args.department);
    wizard.set_position(&args.position)?;
    wizard.set_text(FieldId::Experience, &args.experience);
    wizard.set_text(FieldId::Qualification, &args.qualification);

    wizard.select_cv(load_file(&args.cv)?)?;
    if let Some(url) = &args.linkedin {
        wizard.set_text(FieldId::LinkedIn, url);
    }
    if let Some(text) = &args.cover_letter {
        wizard.set_text(FieldId::CoverLetterText, text);
    }
    if let Some(path) = &args.cover_letter_file {
        wizard.select_cover_letter(load_file(path)?)?;
    }

    // Walk every gated step so missing input fails with the form's message
    // and the fields that caused it.
    for _ in 1..TOTAL_STEPS {
        if let Err(err) = wizard.next() {
            report_incomplete(&err);
            return Err(anyhow!(err.to_string()));
        }
    }

    let review = wizard.review();
    println!("{}", "Submitting application:".bold());
    println!("  Name:       {}", review.full_name.cyan());
    println!("  Email:      {}", review.email);
    println!("  Phone:      {}", review.phone);
    println!("  Position:   {} ({})", review.position, review.department);
    println!("  CV:         {}", review.cv_file.dimmed());
    println!();

    let payload = wizard.begin_submit().map_err(|err| {
        report_incomplete(&err);
        anyhow!(err.to_string())
    })?;

    match client.submit_careers(&payload).await {
        Ok(()) => {
            wizard.handle_success();
            println!(
                "{} {}",
                "✓".green(),
                "Application submitted successfully! We will review your \
                 application and contact you soon."
                    .green()
            );
            Ok(())
        }
        Err(err) => {
            let message = err.user_message();
            wizard.handle_failure(&message);
            println!("{} {}", "✗".red(), message.red());
            Err(err.into())
        }
    }
}

/// Read a document from disk, inferring the declared type from its extension.
fn load_file(path: &Path) -> Result<SelectedFile> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let declared_mime = match path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    };

    Ok(SelectedFile {
        size: data.len() as u64,
        file_name,
        declared_mime: declared_mime.to_string(),
        data,
    })
}

/// Print a validation failure with the fields that caused it.
fn report_incomplete(err: &WizardError) {
    println!("{} {}", "✗".red(), err.to_string().red());
    let invalid = match err {
        WizardError::StepIncomplete { invalid } => invalid,
        WizardError::SubmissionIncomplete { invalid } => invalid,
        _ => return,
    };
    for field in invalid {
        println!("  {} {:?}", "▸".yellow(), field);
    }
}
