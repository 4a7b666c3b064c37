//! Pure validation of a lead form snapshot.
//!
//! Every rule runs on every call (no short-circuit), so one submit attempt
//! flags every offending field at once.

use std::sync::OnceLock;

use regex::Regex;

use crate::form::{FieldErrors, LeadForm};

/// Loose `local@domain.tld` shape: at least one non-whitespace, non-`@`
/// character on each side of the `@`, plus a dot in the domain part.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Map a form snapshot to per-field error flags.
///
/// Optional fields (treatment, travel dates) never produce errors.
pub fn validate(form: &LeadForm) -> FieldErrors {
    FieldErrors {
        name: form.name.trim().is_empty(),
        email: form.email.trim().is_empty() || !is_valid_email(&form.email),
        phone: form.phone.trim().is_empty(),
        message: form.message.trim().is_empty(),
        privacy_consent: !form.privacy_consent,
        data_consent: !form.data_consent,
    }
}
