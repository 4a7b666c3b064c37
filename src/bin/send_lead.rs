//! Send-lead binary - drives the client-side submission path end to end:
//! fill the form from the environment, validate, post once to the form
//! endpoint.
//!
//! Usage:
//!   cargo run --bin send-lead
//!
//! Required environment variables:
//! - FORMSPREE_FORM_ID
//! - LEAD_NAME, LEAD_EMAIL, LEAD_PHONE, LEAD_MESSAGE
//!
//! Optional:
//! - LEAD_TREATMENT (implants|veneers|crowns|whitening|smileMakeover)
//! - LEAD_DATES

use anyhow::{bail, Context, Result};
use tracing::info;

use clinic_leads::config::Config;
use clinic_leads::form::{ContactForm, Treatment};
use clinic_leads::formspree::FormspreeClient;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_leads=info".parse()?),
        )
        .init();

    let config = Config::from_env_for_submission()?;
    let client =
        FormspreeClient::from_config(&config).context("Failed to build submission client")?;

    let mut form = ContactForm::new();
    form.set_name(std::env::var("LEAD_NAME").context("LEAD_NAME not set")?);
    form.set_email(std::env::var("LEAD_EMAIL").context("LEAD_EMAIL not set")?);
    form.set_phone(std::env::var("LEAD_PHONE").context("LEAD_PHONE not set")?);
    form.set_message(std::env::var("LEAD_MESSAGE").context("LEAD_MESSAGE not set")?);
    if let Ok(code) = std::env::var("LEAD_TREATMENT") {
        match Treatment::from_code(&code) {
            Some(treatment) => form.set_treatment(Some(treatment)),
            None => bail!("Unknown treatment: {}", code),
        }
    }
    if let Ok(dates) = std::env::var("LEAD_DATES") {
        form.set_travel_dates(dates);
    }
    form.set_privacy_consent(true);
    form.set_data_consent(true);

    form.submit(&client).await;

    if form.is_submitted() {
        info!("Lead submitted successfully");
        Ok(())
    } else if let Some(error) = form.submit_error() {
        bail!("Submission failed: {}", error);
    } else {
        let errors = form.errors();
        bail!(
            "Validation failed (name: {}, email: {}, phone: {}, message: {}, consents: {}/{})",
            errors.name,
            errors.email,
            errors.phone,
            errors.message,
            errors.privacy_consent,
            errors.data_consent,
        );
    }
}
