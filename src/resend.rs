//! Resend transactional-email client used by the server-side relay.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One outbound email, already rendered.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Thin client over the Resend `/emails` endpoint.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ResendClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Deliver one email; returns the provider's delivery id.
    pub async fn send(&self, email: &OutboundEmail) -> Result<String> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(email)
            .send()
            .await
            .context("Failed to send request to Resend API")?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "email delivery failed".to_string());
            anyhow::bail!("Resend API error ({}): {}", status, message);
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .context("Failed to parse Resend response")?;

        Ok(body.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_email() -> OutboundEmail {
        OutboundEmail {
            from: "Smile&Holiday <onboarding@resend.dev>".to_string(),
            to: vec!["info@smileandholiday.com".to_string()],
            reply_to: "jane@example.com".to_string(),
            subject: "[Smile&Holiday] New inquiry: Jane Doe".to_string(),
            html: "<h2>New contact form message</h2>".to_string(),
        }
    }

    // ==================== Success ====================

    #[tokio::test]
    async fn test_send_returns_delivery_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("Authorization", "Bearer re_test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "4ef0945f-cab2-42b6-a4c6-a0e0b1f1e044",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ResendClient::new("re_test_key", mock_server.uri());
        let id = client.send(&sample_email()).await.expect("send");
        assert_eq!(id, "4ef0945f-cab2-42b6-a4c6-a0e0b1f1e044");
    }

    // ==================== Failures ====================

    #[tokio::test]
    async fn test_send_surfaces_provider_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "statusCode": 403,
                "message": "API key is invalid",
            })))
            .mount(&mock_server)
            .await;

        let client = ResendClient::new("re_bad_key", mock_server.uri());
        let err = client.send(&sample_email()).await.unwrap_err();
        assert!(err.to_string().contains("API key is invalid"));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_send_generic_message_on_unparsable_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        let client = ResendClient::new("re_test_key", mock_server.uri());
        let err = client.send(&sample_email()).await.unwrap_err();
        assert!(err.to_string().contains("email delivery failed"));
    }

    #[tokio::test]
    async fn test_send_malformed_success_body_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = ResendClient::new("re_test_key", mock_server.uri());
        let err = client.send(&sample_email()).await.unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
