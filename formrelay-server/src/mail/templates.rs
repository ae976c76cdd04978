//! Email content templates
//!
//! Each builder returns the subject plus both body renditions. User-supplied
//! values are HTML-escaped in the HTML body; the plain-text alternative
//! keeps the raw (already CRLF-stripped) values.

use chrono::Utc;
use formrelay_core::domain::application::CareerApplication;
use formrelay_core::domain::enquiry::Enquiry;
use formrelay_core::domain::text::escape_html;

/// Subject and both body renditions of a message.
pub struct MessageContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

fn table_row(label: &str, value_html: &str) -> String {
    format!(
        "<tr><td style='padding:8px;border-bottom:1px solid #eee;font-weight:bold;width:180px;'>{}</td>\
         <td style='padding:8px;border-bottom:1px solid #eee;'>{}</td></tr>\n",
        label, value_html
    )
}

fn wrap_html(title: &str, inner: &str) -> String {
    format!(
        "<div style='font-family:Arial,sans-serif;max-width:700px;margin:0 auto;color:#333;'>\
         <div style='background:#12263a;padding:24px;text-align:center;'>\
         <h1 style='color:#d4a815;margin:0;font-size:22px;'>{}</h1></div>\
         <div style='padding:24px;background:#ffffff;'>{}</div>\
         <div style='background:#12263a;padding:16px;text-align:center;'>\
         <p style='color:#888;font-size:12px;margin:0;'>Northvale Group</p></div></div>",
        title, inner
    )
}

/// Operator notification for a careers application.
pub fn careers_operator(
    app: &CareerApplication,
    cv_file_name: &str,
    cover_file_name: Option<&str>,
) -> MessageContent {
    let name = escape_html(&app.full_name);
    let email = escape_html(&app.email);
    let position = escape_html(&app.position);

    let mut rows = String::new();
    rows.push_str(&table_row("Full Name", &name));
    rows.push_str(&table_row(
        "Email",
        &format!("<a href='mailto:{}'>{}</a>", email, email),
    ));
    rows.push_str(&table_row("Phone", &escape_html(&app.phone)));
    rows.push_str(&table_row("Location/State", &escape_html(&app.location)));
    rows.push_str(&table_row("Department", &escape_html(&app.department)));
    rows.push_str(&table_row("Position Applied For", &position));
    rows.push_str(&table_row("Years of Experience", &escape_html(&app.experience)));
    rows.push_str(&table_row(
        "Highest Qualification",
        &escape_html(&app.qualification),
    ));
    rows.push_str(&table_row(
        "CV/Resume",
        &format!("Attached: {}", escape_html(cv_file_name)),
    ));
    if !app.linked_in.is_empty() {
        rows.push_str(&table_row("LinkedIn Profile", &escape_html(&app.linked_in)));
    }
    if let Some(cover) = cover_file_name {
        rows.push_str(&table_row(
            "Cover Letter",
            &format!("Attached: {}", escape_html(cover)),
        ));
    }
    if !app.cover_letter.is_empty() {
        rows.push_str(&table_row(
            "Cover Letter (text)",
            &escape_html(&app.cover_letter).replace('\n', "<br>"),
        ));
    }

    let inner = format!(
        "<h2 style='color:#12263a;margin-top:0;'>Application for: {}</h2>\
         <p>A new job application has been submitted through the careers portal.</p>\
         <table style='width:100%;border-collapse:collapse;'>{}</table>\
         <p style='margin-top:24px;padding:12px;background:#f5f5f5;border-left:4px solid #d4a815;'>\
         <strong>Action Required:</strong> Please review this application and contact the \
         candidate if their qualifications match our requirements.</p>",
        position, rows
    );

    let mut text = format!(
        "New Job Application\n\nPosition: {position}\n\nPersonal Information:\n\
         Name: {name}\nEmail: {email}\nPhone: {phone}\nLocation: {location}\n\n\
         Professional Information:\nDepartment: {department}\nPosition: {position}\n\
         Experience: {experience}\nQualification: {qualification}\n\nLinkedIn: {linked_in}\n\n\
         CV/Resume attached: {cv}",
        position = app.position,
        name = app.full_name,
        email = app.email,
        phone = app.phone,
        location = app.location,
        department = app.department,
        experience = app.experience,
        qualification = app.qualification,
        linked_in = app.linked_in,
        cv = cv_file_name,
    );
    if let Some(cover) = cover_file_name {
        text.push_str(&format!("\nCover Letter attached: {}", cover));
    }

    MessageContent {
        subject: format!("New Job Application — {} — {}", app.position, app.full_name),
        html: wrap_html("NEW JOB APPLICATION", &inner),
        text,
    }
}

/// Confirmation sent to the applicant.
pub fn careers_confirmation(app: &CareerApplication) -> MessageContent {
    let name = escape_html(&app.full_name);
    let position = escape_html(&app.position);
    let department = escape_html(&app.department);
    let date = Utc::now().format("%B %-d, %Y").to_string();

    let inner = format!(
        "<p>Dear {name},</p>\
         <p>Thank you for applying for the <strong>{position}</strong> position at \
         <strong>Northvale Group</strong>.</p>\
         <p>We have received your application and our HR team will review it shortly. If your \
         qualifications match our requirements, we will contact you for the next steps.</p>\
         <div style='background:#f5f5f5;padding:16px;border-left:4px solid #d4a815;margin:20px 0;'>\
         <p style='margin:0;'><strong>Application Summary:</strong></p>\
         <p style='margin:6px 0 0;'>Position: <strong>{position}</strong></p>\
         <p style='margin:6px 0 0;'>Department: {department}</p>\
         <p style='margin:6px 0 0;'>Date Submitted: {date}</p></div>\
         <p><strong>What happens next?</strong></p>\
         <ul style='color:#666;line-height:1.8;'>\
         <li>Our HR team will carefully review your application and CV</li>\
         <li>If your profile matches our requirements, we will contact you via email or phone</li>\
         <li>The review process typically takes 1-2 weeks</li></ul>\
         <p style='color:#666;font-size:14px;'><em>This is an automated confirmation email. \
         Do not reply to this message.</em></p>",
    );

    let text = format!(
        "Dear {name},\n\nThank you for applying for the {position} position at Northvale \
         Group.\n\nWe have received your application and our HR team will review it shortly. If \
         your qualifications match our requirements, we will contact you for the next \
         steps.\n\nApplication Summary:\nPosition: {position}\nDepartment: {department}\n\
         Date Submitted: {date}\n\nWhat happens next?\n\
         - Our HR team will carefully review your application and CV\n\
         - If your profile matches our requirements, we will contact you via email or phone\n\
         - The review process typically takes 1-2 weeks\n\n\
         This is an automated confirmation email. Do not reply to this message.\n\n\
         Best Regards,\nNorthvale Group\nHR Department",
        name = app.full_name,
        position = app.position,
        department = app.department,
        date = date,
    );

    MessageContent {
        subject: "Application Received — Northvale Group".to_string(),
        html: wrap_html("NORTHVALE GROUP", &inner),
        text,
    }
}

/// Operator notification for a contact enquiry.
pub fn enquiry_operator(enquiry: &Enquiry) -> MessageContent {
    let mut rows = String::new();
    rows.push_str(&table_row("Name", &escape_html(&enquiry.name)));
    if !enquiry.email.is_empty() {
        rows.push_str(&table_row("Email", &escape_html(&enquiry.email)));
    }
    if !enquiry.phone.is_empty() {
        rows.push_str(&table_row("Phone", &escape_html(&enquiry.phone)));
    }
    if !enquiry.subject.is_empty() {
        rows.push_str(&table_row("Subject", &escape_html(&enquiry.subject)));
    }
    rows.push_str(&table_row(
        "Message",
        &escape_html(&enquiry.message).replace('\n', "<br>"),
    ));

    let inner = format!(
        "<h2 style='color:#12263a;margin-top:0;'>New Enquiry</h2>\
         <p>A new enquiry has been submitted through the contact form.</p>\
         <table style='width:100%;border-collapse:collapse;'>{}</table>",
        rows
    );

    let text = format!(
        "New Enquiry\n\nName: {}\nEmail: {}\nPhone: {}\nSubject: {}\n\nMessage:\n{}",
        enquiry.name, enquiry.email, enquiry.phone, enquiry.subject, enquiry.message
    );

    MessageContent {
        subject: format!("New Enquiry — {}", enquiry.name),
        html: wrap_html("NEW ENQUIRY", &inner),
        text,
    }
}

/// Confirmation sent to the enquirer (skipped when no address was given).
pub fn enquiry_confirmation(enquiry: &Enquiry) -> MessageContent {
    let name = escape_html(&enquiry.name);

    let inner = format!(
        "<p>Dear {name},</p>\
         <p>Thank you for contacting <strong>Northvale Group</strong>. We have received your \
         message and a member of our team will get back to you shortly.</p>\
         <p style='color:#666;font-size:14px;'><em>This is an automated confirmation email.</em></p>",
    );

    let text = format!(
        "Dear {},\n\nThank you for contacting Northvale Group. We have received your message \
         and a member of our team will get back to you shortly.\n\nBest Regards,\nNorthvale Group",
        enquiry.name
    );

    MessageContent {
        subject: "We received your enquiry — Northvale Group".to_string(),
        html: wrap_html("NORTHVALE GROUP", &inner),
        text,
    }
}
