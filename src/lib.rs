//! Lead intake for the Smile&Holiday dental-tourism site: contact-form
//! state and validation, one-shot submission to the configured form
//! endpoint, a server-side mail relay backed by Resend, cookie-consent
//! persistence gating analytics tags, and two-locale content resolution.

pub mod analytics;
pub mod config;
pub mod consent;
pub mod form;
pub mod formspree;
pub mod i18n;
pub mod relay;
pub mod resend;
pub mod validator;
