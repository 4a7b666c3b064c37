//! Locale type: validated locale representation plus URL path resolution.

use anyhow::{bail, Result};

use crate::i18n::{LocaleConfig, LocaleRegistry};

/// A validated locale.
///
/// Only supported, enabled locales can be constructed, so the rest of the
/// code never sees an unknown code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    /// Polish: the default locale, served unprefixed.
    pub const POLISH: Locale = Locale { code: "pl" };

    /// English: served behind the `/en` path prefix.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a language code string.
    ///
    /// Unrecognized or disabled codes are an error — a request for an
    /// unknown locale is a not-found condition.
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The locale served without a path prefix.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Resolve a request path to a locale and the remaining path.
    ///
    /// A first segment matching a known locale code selects that locale;
    /// anything else is a page path in the default locale. `"/en"` alone
    /// resolves to the English root.
    pub fn split_path(path: &str) -> (Locale, String) {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = match trimmed.split_once('/') {
            Some((first, rest)) => (first, rest),
            None => (trimmed, ""),
        };

        match Locale::from_code(first) {
            Ok(locale) => {
                let remainder = if rest.is_empty() {
                    "/".to_string()
                } else {
                    format!("/{}", rest)
                };
                (locale, remainder)
            }
            Err(_) => {
                let remainder = if path.starts_with('/') {
                    path.to_string()
                } else {
                    format!("/{}", path)
                };
                (Locale::default_locale(), remainder)
            }
        }
    }

    /// The ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry configuration for this locale.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed Locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Prefix pages of this locale carry in URLs ("" for the default).
    pub fn path_prefix(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!("/{}", self.code)
        }
    }
}
