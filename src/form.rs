use serde::{Deserialize, Serialize};

use crate::formspree::{LeadPayload, LeadSender, SubmitError};
use crate::i18n::{Locale, LocaleStrings};
use crate::validator::validate;

/// Treatments offered on the site's contact form.
///
/// Wire names are the camelCase option values the form has always used, so
/// payloads stay byte-compatible with the existing inbox filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Treatment {
    Implants,
    Veneers,
    Crowns,
    Whitening,
    SmileMakeover,
}

impl Treatment {
    pub const ALL: [Treatment; 5] = [
        Treatment::Implants,
        Treatment::Veneers,
        Treatment::Crowns,
        Treatment::Whitening,
        Treatment::SmileMakeover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Treatment::Implants => "implants",
            Treatment::Veneers => "veneers",
            Treatment::Crowns => "crowns",
            Treatment::Whitening => "whitening",
            Treatment::SmileMakeover => "smileMakeover",
        }
    }

    pub fn from_code(code: &str) -> Option<Treatment> {
        Treatment::ALL.iter().copied().find(|t| t.as_str() == code)
    }
}

/// One prospective patient's inquiry, field by field, as typed.
///
/// Created empty on page mount, mutated by user input, consumed once at
/// submit time.
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub treatment: Option<Treatment>,
    pub travel_dates: String,
    pub message: String,
    pub privacy_consent: bool,
    pub data_consent: bool,
}

/// Per-field "has error" flags for the six required fields.
///
/// Optional fields (treatment, travel dates) never flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub message: bool,
    pub privacy_consent: bool,
    pub data_consent: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.name
            || self.email
            || self.phone
            || self.message
            || self.privacy_consent
            || self.data_consent
    }
}

/// Where one form instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits (also after a failed submit).
    Editing,
    /// A submission is in flight; further submits are refused.
    Sending,
    /// Terminal: the form was delivered and can no longer be edited or
    /// resubmitted.
    Submitted,
}

/// Owns the mutable state of one contact-form instance: field values,
/// validation flags, lifecycle phase and the last submit error.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: LeadForm,
    errors: FieldErrors,
    phase: FormPhase,
    submit_error: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: LeadForm::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::Editing,
            submit_error: None,
        }
    }

    pub fn fields(&self) -> &LeadForm {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    fn editable(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    /// Localized label for the submit control in the current phase.
    pub fn submit_label(&self, locale: Locale) -> &'static str {
        let strings = LocaleStrings::for_locale(locale);
        match self.phase {
            FormPhase::Editing => strings.form_submit,
            FormPhase::Sending => strings.form_sending,
            FormPhase::Submitted => strings.form_success,
        }
    }

    // Field setters clear the matching error flag optimistically, the same
    // way the form UI un-reddens a field as soon as the user touches it.
    // Edits are ignored once the form reached its terminal state.

    pub fn set_name(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.name = value.into();
            self.errors.name = false;
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.email = value.into();
            self.errors.email = false;
        }
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.phone = value.into();
            self.errors.phone = false;
        }
    }

    pub fn set_treatment(&mut self, value: Option<Treatment>) {
        if self.editable() {
            self.fields.treatment = value;
        }
    }

    pub fn set_travel_dates(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.travel_dates = value.into();
        }
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.message = value.into();
            self.errors.message = false;
        }
    }

    pub fn set_privacy_consent(&mut self, value: bool) {
        if self.editable() {
            self.fields.privacy_consent = value;
            self.errors.privacy_consent = false;
        }
    }

    pub fn set_data_consent(&mut self, value: bool) {
        if self.editable() {
            self.fields.data_consent = value;
            self.errors.data_consent = false;
        }
    }

    /// Validate and, if the form is clean and idle, move to `Sending` and
    /// hand back the payload for the single outbound request.
    ///
    /// Returns `None` when validation flags any field, while a submission
    /// is already in flight, or after the terminal state was reached. The
    /// caller must pair every `Some` with a later `finish_submit`.
    pub fn try_begin_submit(&mut self) -> Option<LeadPayload> {
        if self.phase != FormPhase::Editing {
            return None;
        }

        self.errors = validate(&self.fields);
        if self.errors.any() {
            return None;
        }

        self.submit_error = None;
        self.phase = FormPhase::Sending;
        Some(LeadPayload::from_form(&self.fields))
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Success is terminal. Failure returns to `Editing` with every field
    /// value retained, so the user can amend and resubmit.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        debug_assert_eq!(self.phase, FormPhase::Sending);
        match outcome {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                self.submit_error = None;
            }
            Err(e) => {
                self.phase = FormPhase::Editing;
                self.submit_error = Some(e.to_string());
            }
        }
    }

    /// Run the whole submit flow: validate, fire at most one request
    /// through `sender`, fold the outcome back into form state.
    pub async fn submit<S: LeadSender>(&mut self, sender: &S) {
        let Some(payload) = self.try_begin_submit() else {
            return;
        };
        let outcome = sender.send_lead(&payload).await;
        self.finish_submit(outcome);
    }
}
