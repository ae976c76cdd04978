//! Multi-step careers form controller
//!
//! A headless state machine for the four-step application wizard: one step
//! visible at a time, forward progress gated on per-step validation,
//! unconditional backward movement, a review projection recomputed from live
//! values, and a submit control that is disabled for the duration of exactly
//! one in-flight request.
//!
//! Timing is owned by the UI layer: it clears invalid-field flags after
//! [`INVALID_FLAG_CLEAR`] and calls [`Wizard::finish_success_reset`] after
//! [`SUCCESS_RESET_DELAY`]. The flag timer is deliberately independent of
//! revalidation, matching the shipped behavior.

use std::time::Duration;

use formrelay_core::domain::application::CareerApplication;
use formrelay_core::domain::attachment::{FileKind, MAX_UPLOAD_BYTES};
use formrelay_core::domain::{department, email};
use thiserror::Error;

use crate::{CareersPayload, FilePayload, phone};

pub const TOTAL_STEPS: u8 = 4;

/// How long an invalid-field flag stays on before the UI clears it.
pub const INVALID_FLAG_CLEAR: Duration = Duration::from_secs(2);

/// Pause between the success notice and the return to step 1.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

pub const SUBMIT_IDLE_LABEL: &str = "Submit Application";
pub const SUBMIT_IN_FLIGHT_LABEL: &str = "Submitting...";

pub const SUCCESS_NOTICE: &str =
    "Application submitted successfully! We will review your application and contact you soon.";

/// A logical form field. Step assignment drives which fields each forward
/// transition validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldId {
    // step 1: personal
    FullName,
    Email,
    Phone,
    Location,
    // step 2: professional
    Department,
    Position,
    Experience,
    Qualification,
    // step 3: documents
    Cv,
    LinkedIn,
    CoverLetterText,
    CoverLetterFile,
}

impl FieldId {
    pub fn step(self) -> u8 {
        match self {
            FieldId::FullName | FieldId::Email | FieldId::Phone | FieldId::Location => 1,
            FieldId::Department
            | FieldId::Position
            | FieldId::Experience
            | FieldId::Qualification => 2,
            FieldId::Cv | FieldId::LinkedIn | FieldId::CoverLetterText | FieldId::CoverLetterFile => 3,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(
            self,
            FieldId::LinkedIn | FieldId::CoverLetterText | FieldId::CoverLetterFile
        )
    }
}

const ALL_FIELDS: &[FieldId] = &[
    FieldId::FullName,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Location,
    FieldId::Department,
    FieldId::Position,
    FieldId::Experience,
    FieldId::Qualification,
    FieldId::Cv,
    FieldId::LinkedIn,
    FieldId::CoverLetterText,
    FieldId::CoverLetterFile,
];

/// A file chosen in the form, kept in memory until submission.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub declared_mime: String,
    pub size: u64,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Submit button state as the UI should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    fn idle() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_IDLE_LABEL,
        }
    }

    fn in_flight() -> Self {
        Self {
            enabled: false,
            label: SUBMIT_IN_FLIGHT_LABEL,
        }
    }
}

/// Read-only projection of everything collected, shown on the review step.
/// Empty values render as "-".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub department: String,
    pub position: String,
    pub experience: String,
    pub qualification: String,
    pub cv_file: String,
    pub linked_in: String,
    pub cover_letter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please fill in all required fields before proceeding.")]
    StepIncomplete { invalid: Vec<FieldId> },

    #[error("Please ensure all required information is provided.")]
    SubmissionIncomplete { invalid: Vec<FieldId> },

    #[error("\"{position}\" is not offered in {department}")]
    PositionNotOffered { department: String, position: String },

    #[error("No department selected")]
    NoDepartmentSelected,

    #[error("Please upload a PDF or Word document (DOC/DOCX)")]
    UnsupportedFileType,

    #[error("File size must be less than 5MB")]
    FileTooLarge,

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

/// The wizard's mutable state: cursor, accumulated input, flags, notice,
/// and submit control.
#[derive(Debug, Clone)]
pub struct Wizard {
    current_step: u8,
    full_name: String,
    email: String,
    phone: String,
    phone_country: String,
    location: String,
    department: String,
    position: String,
    experience: String,
    qualification: String,
    linked_in: String,
    cover_letter: String,
    cv: Option<SelectedFile>,
    cover_letter_file: Option<SelectedFile>,
    flagged: Vec<FieldId>,
    notice: Option<Notice>,
    submit: SubmitControl,
}

impl Wizard {
    /// Fresh wizard at step 1 with the fallback phone country.
    pub fn new() -> Self {
        Self {
            current_step: 1,
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            phone_country: crate::geo::FALLBACK_COUNTRY.to_string(),
            location: String::new(),
            department: String::new(),
            position: String::new(),
            experience: String::new(),
            qualification: String::new(),
            linked_in: String::new(),
            cover_letter: String::new(),
            cv: None,
            cover_letter_file: None,
            flagged: Vec::new(),
            notice: None,
            submit: SubmitControl::idle(),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn flagged_fields(&self) -> &[FieldId] {
        &self.flagged
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    // =========================================================================
    // Field input
    // =========================================================================

    /// Set a plain text field. Department, position, and files have their
    /// own entry points because they carry extra rules.
    pub fn set_text(&mut self, field: FieldId, value: &str) {
        let slot = match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Location => &mut self.location,
            FieldId::Experience => &mut self.experience,
            FieldId::Qualification => &mut self.qualification,
            FieldId::LinkedIn => &mut self.linked_in,
            FieldId::CoverLetterText => &mut self.cover_letter,
            FieldId::Department
            | FieldId::Position
            | FieldId::Cv
            | FieldId::CoverLetterFile => {
                tracing::warn!("set_text called for {:?}", field);
                return;
            }
        };
        *slot = value.to_string();
    }

    /// Override the phone country detected by geolocation.
    pub fn set_phone_country(&mut self, country: &str) {
        self.phone_country = country.to_ascii_uppercase();
    }

    pub fn phone_country(&self) -> &str {
        &self.phone_country
    }

    /// Select a department. Any previously chosen position is reset, and the
    /// repopulated option list is returned (empty for no/unknown department,
    /// in which case the position control is disabled).
    pub fn set_department(&mut self, value: &str) -> &'static [&'static str] {
        self.department = value.to_string();
        self.position = String::new();
        department::positions_for(value).unwrap_or(&[])
    }

    pub fn position_control_enabled(&self) -> bool {
        department::positions_for(&self.department).is_some()
    }

    /// Choose a position from the current department's option list.
    pub fn set_position(&mut self, value: &str) -> Result<(), WizardError> {
        if !self.position_control_enabled() {
            return Err(WizardError::NoDepartmentSelected);
        }
        if !department::is_valid_position(&self.department, value) {
            return Err(WizardError::PositionNotOffered {
                department: self.department.clone(),
                position: value.to_string(),
            });
        }
        self.position = value.to_string();
        Ok(())
    }

    /// Choose the CV file. A wrong declared type or oversized file reverts
    /// the selection and clears the displayed filename.
    pub fn select_cv(&mut self, file: SelectedFile) -> Result<(), WizardError> {
        Self::select_file(&mut self.cv, file)
    }

    /// Choose the optional cover-letter file, same rules as the CV.
    pub fn select_cover_letter(&mut self, file: SelectedFile) -> Result<(), WizardError> {
        Self::select_file(&mut self.cover_letter_file, file)
    }

    fn select_file(
        slot: &mut Option<SelectedFile>,
        file: SelectedFile,
    ) -> Result<(), WizardError> {
        if FileKind::from_declared_mime(&file.declared_mime).is_none() {
            *slot = None;
            return Err(WizardError::UnsupportedFileType);
        }
        if file.size > MAX_UPLOAD_BYTES {
            *slot = None;
            return Err(WizardError::FileTooLarge);
        }
        *slot = Some(file);
        Ok(())
    }

    /// Filename shown next to the CV input once a file was accepted.
    pub fn displayed_cv_name(&self) -> Option<&str> {
        self.cv.as_ref().map(|f| f.file_name.as_str())
    }

    // =========================================================================
    // Step transitions
    // =========================================================================

    fn field_value_present(&self, field: FieldId) -> bool {
        match field {
            FieldId::FullName => !self.full_name.trim().is_empty(),
            FieldId::Email => email::is_valid_email(&self.email),
            FieldId::Phone => !self.phone.trim().is_empty(),
            FieldId::Location => !self.location.trim().is_empty(),
            FieldId::Department => !self.department.trim().is_empty(),
            FieldId::Position => !self.position.trim().is_empty(),
            FieldId::Experience => !self.experience.trim().is_empty(),
            FieldId::Qualification => !self.qualification.trim().is_empty(),
            FieldId::Cv => self.cv.is_some(),
            FieldId::LinkedIn | FieldId::CoverLetterText | FieldId::CoverLetterFile => true,
        }
    }

    /// Required fields of `step` that fail validation right now. Idempotent;
    /// no state is touched.
    pub fn validate(&self, step: u8) -> Vec<FieldId> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|f| f.step() == step && f.is_required())
            .filter(|f| !self.field_value_present(*f))
            .collect()
    }

    /// Forward transition, gated on validation of the current step. On
    /// failure the cursor stays, every invalid field is flagged, and a
    /// blocking notice is set.
    pub fn next(&mut self) -> Result<u8, WizardError> {
        let invalid = self.validate(self.current_step);
        if !invalid.is_empty() {
            self.flagged = invalid.clone();
            self.notice = Some(Notice::Error(
                WizardError::StepIncomplete { invalid: vec![] }.to_string(),
            ));
            return Err(WizardError::StepIncomplete { invalid });
        }

        self.current_step = (self.current_step + 1).min(TOTAL_STEPS);
        Ok(self.current_step)
    }

    /// Backward transition; never validates.
    pub fn previous(&mut self) -> u8 {
        self.current_step = self.current_step.saturating_sub(1).max(1);
        self.current_step
    }

    /// Clear the transient invalid-field flags. The UI calls this after
    /// [`INVALID_FLAG_CLEAR`], whether or not the fields were fixed.
    pub fn clear_invalid_flags(&mut self) {
        self.flagged.clear();
    }

    /// The review projection, recomputed from live values on every call, so
    /// edits made via Previous are always reflected.
    pub fn review(&self) -> Review {
        fn or_dash(value: &str) -> String {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                "-".to_string()
            } else {
                trimmed.to_string()
            }
        }

        let phone = phone::normalize(&self.phone_country, &self.phone)
            .unwrap_or_else(|| self.phone.trim().to_string());

        Review {
            full_name: or_dash(&self.full_name),
            email: or_dash(&self.email),
            phone: or_dash(&phone),
            location: or_dash(&self.location),
            department: or_dash(&self.department),
            position: or_dash(&self.position),
            experience: or_dash(&self.experience),
            qualification: or_dash(&self.qualification),
            cv_file: self
                .displayed_cv_name()
                .map(str::to_string)
                .unwrap_or_else(|| "-".to_string()),
            linked_in: or_dash(&self.linked_in),
            cover_letter: or_dash(&self.cover_letter),
        }
    }

    // =========================================================================
    // Submission lifecycle
    // =========================================================================

    /// Final confirmation: re-check everything, disable the submit control,
    /// and serialize the payload with the normalized phone number.
    pub fn begin_submit(&mut self) -> Result<CareersPayload, WizardError> {
        if !self.submit.enabled {
            return Err(WizardError::SubmissionInFlight);
        }

        let invalid: Vec<FieldId> = (1..TOTAL_STEPS)
            .flat_map(|step| self.validate(step))
            .collect();
        if !invalid.is_empty() {
            self.notice = Some(Notice::Error(
                WizardError::SubmissionIncomplete { invalid: vec![] }.to_string(),
            ));
            return Err(WizardError::SubmissionIncomplete { invalid });
        }

        let Some(cv) = self.cv.as_ref() else {
            return Err(WizardError::SubmissionIncomplete {
                invalid: vec![FieldId::Cv],
            });
        };

        let phone = phone::normalize(&self.phone_country, &self.phone)
            .unwrap_or_else(|| self.phone.trim().to_string());

        let payload = CareersPayload {
            application: CareerApplication {
                full_name: self.full_name.clone(),
                email: self.email.clone(),
                phone,
                location: self.location.clone(),
                department: self.department.clone(),
                position: self.position.clone(),
                experience: self.experience.clone(),
                qualification: self.qualification.clone(),
                linked_in: self.linked_in.clone(),
                cover_letter: self.cover_letter.clone(),
            }
            .sanitized(),
            cv: to_file_payload(cv),
            cover_letter: self.cover_letter_file.as_ref().map(to_file_payload),
        };

        self.submit = SubmitControl::in_flight();
        Ok(payload)
    }

    /// Structurally valid success response: show the notice and reset all
    /// fields and the file indicator. The submit control stays disabled
    /// until [`Self::finish_success_reset`] runs after the fixed delay.
    pub fn handle_success(&mut self) {
        let step = self.current_step;
        let country = self.phone_country.clone();
        *self = Wizard::new();
        self.current_step = step;
        self.phone_country = country;
        self.notice = Some(Notice::Success(SUCCESS_NOTICE.to_string()));
        self.submit = SubmitControl::in_flight();
    }

    /// Return to step 1 and restore the idle submit control. The UI calls
    /// this [`SUCCESS_RESET_DELAY`] after [`Self::handle_success`].
    pub fn finish_success_reset(&mut self) {
        self.current_step = 1;
        self.notice = None;
        self.submit = SubmitControl::idle();
    }

    /// Any failure: show the notice (server message when present) and make
    /// the submit control actionable again immediately. No auto-retry.
    pub fn handle_failure(&mut self, message: &str) {
        self.notice = Some(Notice::Error(message.to_string()));
        self.submit = SubmitControl::idle();
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

fn to_file_payload(file: &SelectedFile) -> FilePayload {
    FilePayload {
        file_name: file.file_name.clone(),
        content_type: file.declared_mime.clone(),
        data: file.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_file(size: u64) -> SelectedFile {
        SelectedFile {
            file_name: "cv.pdf".to_string(),
            declared_mime: "application/pdf".to_string(),
            size,
            data: b"%PDF-1.7".to_vec(),
        }
    }

    fn fill_step1(wizard: &mut Wizard) {
        wizard.set_text(FieldId::FullName, "Jane Doe");
        wizard.set_text(FieldId::Email, "jane@example.com");
        wizard.set_text(FieldId::Phone, "0803 601 0955");
        wizard.set_text(FieldId::Location, "Jos");
    }

    fn fill_step2(wizard: &mut Wizard) {
        wizard.set_department("Construction");
        wizard.set_position("Site Engineer").unwrap();
        wizard.set_text(FieldId::Experience, "5 years");
        wizard.set_text(FieldId::Qualification, "BSc");
    }

    fn complete_wizard() -> Wizard {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.next().unwrap();
        fill_step2(&mut wizard);
        wizard.next().unwrap();
        wizard.select_cv(pdf_file(1024)).unwrap();
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn test_starts_at_step_one_idle() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.submit_control(), &SubmitControl::idle());
        assert!(wizard.notice().is_none());
    }

    #[test]
    fn test_next_blocked_flags_every_empty_required_field() {
        let mut wizard = Wizard::new();
        wizard.set_text(FieldId::FullName, "Jane Doe");

        let err = wizard.next().unwrap_err();
        assert_eq!(wizard.current_step(), 1);
        let WizardError::StepIncomplete { invalid } = err else {
            panic!("wrong error")
        };
        assert_eq!(invalid, vec![FieldId::Email, FieldId::Phone, FieldId::Location]);
        assert_eq!(wizard.flagged_fields(), &invalid[..]);
        assert!(matches!(wizard.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn test_flags_clear_independent_of_revalidation() {
        let mut wizard = Wizard::new();
        wizard.next().unwrap_err();
        assert!(!wizard.flagged_fields().is_empty());

        // still invalid, but the timer-driven clear empties the flags anyway
        wizard.clear_invalid_flags();
        assert!(wizard.flagged_fields().is_empty());
        assert!(wizard.validate(1).contains(&FieldId::FullName));
    }

    #[test]
    fn test_invalid_email_blocks_step_one() {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.set_text(FieldId::Email, "jane@example");

        let err = wizard.next().unwrap_err();
        let WizardError::StepIncomplete { invalid } = err else {
            panic!("wrong error")
        };
        assert_eq!(invalid, vec![FieldId::Email]);
    }

    #[test]
    fn test_previous_is_unconditional_and_clamped() {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), 2);

        // step 2 untouched, previous still works
        assert_eq!(wizard.previous(), 1);
        assert_eq!(wizard.previous(), 1);
    }

    #[test]
    fn test_department_change_resets_position() {
        let mut wizard = Wizard::new();
        let options = wizard.set_department("Construction");
        assert_eq!(options.len(), 5);
        assert!(wizard.position_control_enabled());
        wizard.set_position("Supervisor").unwrap();

        let options = wizard.set_department("Oil & Gas");
        assert_eq!(options, ["Pump Attendant"]);
        // stale position never survives a department change
        assert!(wizard.validate(2).contains(&FieldId::Position));

        let options = wizard.set_department("");
        assert!(options.is_empty());
        assert!(!wizard.position_control_enabled());
    }

    #[test]
    fn test_position_must_come_from_lookup() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.set_position("Accountant").unwrap_err(),
            WizardError::NoDepartmentSelected
        );

        wizard.set_department("Oil & Gas");
        assert!(matches!(
            wizard.set_position("Accountant").unwrap_err(),
            WizardError::PositionNotOffered { .. }
        ));
        assert!(wizard.set_position("Pump Attendant").is_ok());
    }

    #[test]
    fn test_cv_rejection_reverts_selection() {
        let mut wizard = Wizard::new();
        wizard.select_cv(pdf_file(1024)).unwrap();
        assert_eq!(wizard.displayed_cv_name(), Some("cv.pdf"));

        let mut png = pdf_file(1024);
        png.declared_mime = "image/png".to_string();
        assert_eq!(
            wizard.select_cv(png).unwrap_err(),
            WizardError::UnsupportedFileType
        );
        assert_eq!(wizard.displayed_cv_name(), None);
    }

    #[test]
    fn test_cv_size_boundary() {
        let mut wizard = Wizard::new();
        assert!(wizard.select_cv(pdf_file(MAX_UPLOAD_BYTES)).is_ok());
        assert_eq!(
            wizard.select_cv(pdf_file(MAX_UPLOAD_BYTES + 1)).unwrap_err(),
            WizardError::FileTooLarge
        );
        assert_eq!(wizard.displayed_cv_name(), None);
    }

    #[test]
    fn test_review_reflects_edits_after_previous() {
        let mut wizard = complete_wizard();
        assert_eq!(wizard.current_step(), 4);
        assert_eq!(wizard.review().location, "Jos");

        wizard.previous();
        wizard.previous();
        wizard.previous();
        wizard.set_text(FieldId::Location, "Abuja");
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();

        let review = wizard.review();
        assert_eq!(review.location, "Abuja");
        assert_eq!(review.phone, "+2348036010955");
        assert_eq!(review.cv_file, "cv.pdf");
        assert_eq!(review.linked_in, "-");
    }

    #[test]
    fn test_begin_submit_normalizes_phone_and_disables_control() {
        let mut wizard = complete_wizard();
        let payload = wizard.begin_submit().unwrap();

        assert_eq!(payload.application.phone, "+2348036010955");
        assert_eq!(payload.cv.file_name, "cv.pdf");
        assert!(payload.cover_letter.is_none());
        assert_eq!(wizard.submit_control(), &SubmitControl::in_flight());

        // no concurrent submissions
        assert_eq!(
            wizard.begin_submit().unwrap_err(),
            WizardError::SubmissionInFlight
        );
    }

    #[test]
    fn test_begin_submit_rechecks_everything() {
        let mut wizard = Wizard::new();
        assert!(matches!(
            wizard.begin_submit().unwrap_err(),
            WizardError::SubmissionIncomplete { .. }
        ));
        assert_eq!(wizard.submit_control(), &SubmitControl::idle());
    }

    #[test]
    fn test_success_resets_fields_then_returns_to_step_one() {
        let mut wizard = complete_wizard();
        wizard.begin_submit().unwrap();

        wizard.handle_success();
        assert_eq!(wizard.review().full_name, "-");
        assert_eq!(wizard.displayed_cv_name(), None);
        assert!(matches!(wizard.notice(), Some(Notice::Success(_))));
        // control stays disabled until the delayed reset
        assert!(!wizard.submit_control().enabled);

        wizard.finish_success_reset();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.submit_control(), &SubmitControl::idle());
        assert!(wizard.notice().is_none());
    }

    #[test]
    fn test_failure_restores_idle_control_immediately() {
        let mut wizard = complete_wizard();
        wizard.begin_submit().unwrap();

        wizard.handle_failure("CV/Resume is required");
        assert_eq!(
            wizard.notice(),
            Some(&Notice::Error("CV/Resume is required".to_string()))
        );
        assert_eq!(wizard.submit_control(), &SubmitControl::idle());
        // field values survive a failure so the user can retry
        assert_eq!(wizard.review().full_name, "Jane Doe");
    }
}
