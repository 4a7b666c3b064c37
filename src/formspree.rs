//! Client-side submission path: one POST per accepted submit to the
//! Formspree endpoint configured for the site. No retry, no queuing — the
//! user is the retry mechanism.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::form::LeadForm;

/// Subject prefix every lead email carries, so the clinic inbox can filter
/// on it.
pub const SUBJECT_PREFIX: &str = "[Smile&Holiday]";

/// Placeholder sent for optional fields the visitor left blank.
const UNSET: &str = "-";

/// The JSON body posted to the form endpoint. All text is trimmed; optional
/// fields collapse to a `-` placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadPayload {
    #[serde(rename = "_subject")]
    pub subject: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub treatment: String,
    pub dates: String,
    pub message: String,
}

impl LeadPayload {
    pub fn from_form(form: &LeadForm) -> Self {
        let name = form.name.trim().to_string();
        Self {
            subject: format!("{} New inquiry: {}", SUBJECT_PREFIX, name),
            name,
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            treatment: form
                .treatment
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| UNSET.to_string()),
            dates: match form.travel_dates.trim() {
                "" => UNSET.to_string(),
                dates => dates.to_string(),
            },
            message: form.message.trim().to_string(),
        }
    }
}

/// Why a submission attempt failed. Every variant maps to UI state, never
/// to a panic.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The destination form id is missing from configuration. Not
    /// retriable until an operator fixes it; raised before any network I/O.
    #[error("form endpoint is not configured")]
    NotConfigured,

    /// The endpoint answered with a non-success status. The message is the
    /// endpoint's `error` field when present, generic otherwise.
    #[error("form endpoint rejected the submission ({status}): {message}")]
    Endpoint { status: u16, message: String },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("failed to reach form endpoint: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error body Formspree returns on rejection.
#[derive(Debug, Deserialize)]
struct EndpointErrorBody {
    error: Option<String>,
}

/// The abstract "send lead" capability the form state machine depends on.
/// Any provider (form API, webhook, ticketing system) can implement it
/// without touching the validator or the state holder.
#[allow(async_fn_in_trait)]
pub trait LeadSender {
    async fn send_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError>;
}

/// Formspree-backed `LeadSender`.
#[derive(Debug, Clone)]
pub struct FormspreeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FormspreeClient {
    /// Build the client from configuration.
    ///
    /// Fails with `SubmitError::NotConfigured` when the form id is absent,
    /// before any request is attempted.
    pub fn from_config(config: &Config) -> Result<Self, SubmitError> {
        let form_id = config
            .formspree_form_id
            .as_deref()
            .ok_or(SubmitError::NotConfigured)?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: format!(
                "{}/f/{}",
                config.formspree_base_url.trim_end_matches('/'),
                form_id
            ),
        })
    }
}

impl LeadSender for FormspreeClient {
    async fn send_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the endpoint's own error text; fall back to a generic
            // message when the body carries none or fails to parse.
            let message = response
                .json::<EndpointErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "submission failed".to_string());

            return Err(SubmitError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        info!("Lead submitted for {}", payload.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Treatment;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str, form_id: Option<&str>) -> Config {
        Config {
            resend_api_key: None,
            resend_base_url: "https://api.resend.com".to_string(),
            contact_email: "info@smileandholiday.com".to_string(),
            resend_from: "Smile&Holiday <onboarding@resend.dev>".to_string(),
            formspree_form_id: form_id.map(str::to_string),
            formspree_base_url: base_url.to_string(),
            consent_dir: "data".to_string(),
            ga4_id: None,
            google_ads_id: None,
            port: 8080,
        }
    }

    fn sample_form() -> LeadForm {
        LeadForm {
            name: "  Jane Doe  ".to_string(),
            email: " jane@example.com ".to_string(),
            phone: "+1 555 0100".to_string(),
            treatment: Some(Treatment::Veneers),
            travel_dates: "  ".to_string(),
            message: " Interested in veneers ".to_string(),
            privacy_consent: true,
            data_consent: true,
        }
    }

    // ==================== Payload Tests ====================

    #[test]
    fn test_payload_trims_and_fills_placeholders() {
        let payload = LeadPayload::from_form(&sample_form());

        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(payload.email, "jane@example.com");
        assert_eq!(payload.treatment, "veneers");
        assert_eq!(payload.dates, "-");
        assert_eq!(payload.message, "Interested in veneers");
    }

    #[test]
    fn test_payload_subject_contains_name() {
        let payload = LeadPayload::from_form(&sample_form());
        assert_eq!(payload.subject, "[Smile&Holiday] New inquiry: Jane Doe");
    }

    #[test]
    fn test_payload_unselected_treatment_placeholder() {
        let mut form = sample_form();
        form.treatment = None;
        let payload = LeadPayload::from_form(&form);
        assert_eq!(payload.treatment, "-");
    }

    #[test]
    fn test_payload_serializes_subject_under_underscore_key() {
        let payload = LeadPayload::from_form(&sample_form());
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("_subject").is_some());
        assert!(json.get("subject").is_none());
    }

    // ==================== Client Construction ====================

    #[test]
    fn test_missing_form_id_is_configuration_error() {
        let config = test_config("https://formspree.io", None);
        let result = FormspreeClient::from_config(&config);
        assert!(matches!(result, Err(SubmitError::NotConfigured)));
    }

    #[test]
    fn test_endpoint_built_from_config() {
        let config = test_config("https://formspree.io/", Some("abc123"));
        let client = FormspreeClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint, "https://formspree.io/f/abc123");
    }

    // ==================== Wire Tests ====================

    #[tokio::test]
    async fn test_send_lead_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/abc123"))
            .and(body_partial_json(serde_json::json!({
                "name": "Jane Doe",
                "_subject": "[Smile&Holiday] New inquiry: Jane Doe",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "next": "/thanks",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri(), Some("abc123"));
        let client = FormspreeClient::from_config(&config).unwrap();
        let payload = LeadPayload::from_form(&sample_form());

        let result = client.send_lead(&payload).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_lead_surfaces_endpoint_error_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/abc123"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "error": "form disabled",
            })))
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri(), Some("abc123"));
        let client = FormspreeClient::from_config(&config).unwrap();
        let payload = LeadPayload::from_form(&sample_form());

        match client.send_lead(&payload).await {
            Err(SubmitError::Endpoint { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "form disabled");
            }
            other => panic!("Expected endpoint error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_send_lead_generic_message_when_body_unparsable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/abc123"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri(), Some("abc123"));
        let client = FormspreeClient::from_config(&config).unwrap();
        let payload = LeadPayload::from_form(&sample_form());

        match client.send_lead(&payload).await {
            Err(SubmitError::Endpoint { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "submission failed");
            }
            other => panic!("Expected endpoint error, got {:?}", other.err()),
        }
    }
}
