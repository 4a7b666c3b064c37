//! Internationalization (i18n) module for the two-locale site.
//!
//! All locale-related logic, localized strings and path resolution is
//! contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Type-safe Locale type validated against the registry
//! - `strings`: Centralized localized strings the core components surface
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_leads::i18n::{Locale, LocaleRegistry};
//!
//! // Default locale (Polish, unprefixed in URLs)
//! let default = Locale::default_locale();
//!
//! // Resolve a path with a locale prefix
//! let (locale, rest) = Locale::split_path("/en/treatments");
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::LocaleStrings;
