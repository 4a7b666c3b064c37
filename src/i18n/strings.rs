//! Localized user-facing strings the lead form and consent banner surface.
//!
//! Strings are stored raw; the caller decides how they are rendered.

use crate::i18n::Locale;

/// All localized strings for one locale.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Contact Form ====================
    /// Label on the idle submit control
    pub form_submit: &'static str,

    /// Label on the submit control while the request is in flight
    pub form_sending: &'static str,

    /// Headline of the terminal "submitted" view
    pub form_success: &'static str,

    /// Sub-line of the terminal "submitted" view
    pub form_success_sub: &'static str,

    /// Generic failure banner shown on a retry-eligible error
    pub form_error: &'static str,

    /// Generic message when the form endpoint is unconfigured
    pub form_unconfigured: &'static str,

    // ==================== Cookie Banner ====================
    /// Banner headline
    pub cookie_title: &'static str,

    /// Banner description line
    pub cookie_description: &'static str,

    /// "Accept all" button
    pub cookie_accept_all: &'static str,

    /// "Reject all" button
    pub cookie_reject_all: &'static str,

    /// "Save preferences" button in the custom panel
    pub cookie_save_preferences: &'static str,
}

impl LocaleStrings {
    pub fn for_locale(locale: Locale) -> &'static LocaleStrings {
        match locale.code() {
            "en" => &ENGLISH_STRINGS,
            _ => &POLISH_STRINGS,
        }
    }
}

// ==================== Polish Strings ====================

/// Polish strings (default locale)
pub const POLISH_STRINGS: LocaleStrings = LocaleStrings {
    // Contact form
    form_submit: "Wyślij wiadomość",
    form_sending: "Wysyłanie...",
    form_success: "Dziękujemy za wiadomość!",
    form_success_sub: "Odezwiemy się w ciągu 24 godzin.",
    form_error: "Coś poszło nie tak. Spróbuj ponownie.",
    form_unconfigured: "Formularz jest chwilowo niedostępny.",

    // Cookie banner
    cookie_title: "Szanujemy Twoją prywatność",
    cookie_description:
        "Używamy plików cookie, aby ulepszać naszą stronę i analizować ruch.",
    cookie_accept_all: "Akceptuj wszystkie",
    cookie_reject_all: "Odrzuć wszystkie",
    cookie_save_preferences: "Zapisz preferencje",
};

// ==================== English Strings ====================

/// English strings
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    // Contact form
    form_submit: "Send message",
    form_sending: "Sending...",
    form_success: "Thank you for your message!",
    form_success_sub: "We will get back to you within 24 hours.",
    form_error: "Something went wrong. Please try again.",
    form_unconfigured: "The form is temporarily unavailable.",

    // Cookie banner
    cookie_title: "We respect your privacy",
    cookie_description: "We use cookies to improve our site and analyze traffic.",
    cookie_accept_all: "Accept all",
    cookie_reject_all: "Reject all",
    cookie_save_preferences: "Save preferences",
};
