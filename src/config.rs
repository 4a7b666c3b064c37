use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Resend (server-side mail relay)
    pub resend_api_key: Option<String>,
    pub resend_base_url: String,
    pub contact_email: String,
    pub resend_from: String,

    // Formspree (client-side submission path)
    pub formspree_form_id: Option<String>,
    pub formspree_base_url: String,

    // Consent storage
    pub consent_dir: String,

    // Google tags
    pub ga4_id: Option<String>,
    pub google_ads_id: Option<String>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Resend - absent key means the relay answers with a
            // configuration error instead of attempting delivery
            resend_api_key: std::env::var("RESEND_API_KEY").ok(),
            resend_base_url: std::env::var("RESEND_BASE_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "info@smileandholiday.com".to_string()),
            resend_from: std::env::var("RESEND_FROM")
                .unwrap_or_else(|_| "Smile&Holiday <onboarding@resend.dev>".to_string()),

            // Formspree
            formspree_form_id: std::env::var("FORMSPREE_FORM_ID").ok(),
            formspree_base_url: std::env::var("FORMSPREE_BASE_URL")
                .unwrap_or_else(|_| "https://formspree.io".to_string()),

            // Consent storage
            consent_dir: std::env::var("CONSENT_DIR").unwrap_or_else(|_| "data".to_string()),

            // Google tags
            ga4_id: std::env::var("GA4_ID").ok(),
            google_ads_id: std::env::var("GOOGLE_ADS_ID").ok(),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// Like `from_env`, but for the client-side submission path where the
    /// form id is mandatory up front.
    pub fn from_env_for_submission() -> Result<Self> {
        let config = Self::from_env()?;
        config
            .formspree_form_id
            .as_ref()
            .context("FORMSPREE_FORM_ID not set")?;
        Ok(config)
    }
}
