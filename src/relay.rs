//! Server-side mail relay: accepts the contact-form JSON body, re-checks
//! the required fields, renders the email and hands it to the Resend
//! client. All failures become HTTP responses at this boundary.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::formspree::SUBJECT_PREFIX;
use crate::resend::{OutboundEmail, ResendClient};

/// Shared state injected into handlers. `mailer` is `None` when the Resend
/// API key is not configured.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mailer: Option<ResendClient>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let mailer = config
            .resend_api_key
            .as_deref()
            .map(|key| ResendClient::new(key, config.resend_base_url.clone()));
        Self { config, mailer }
    }
}

/// Inbound body of `POST /api/contact`. Fields are optional at the wire
/// level so absent ones answer 400 instead of a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub treatment: Option<String>,
    pub dates: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Mail provider key missing; nothing was attempted.
    #[error("email service is not configured")]
    Unconfigured,

    /// One of the server-side required fields is missing or blank.
    #[error("name, email and message are required")]
    MissingFields,

    /// The provider call failed.
    #[error("{0}")]
    Provider(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::Unconfigured => {
                error!("Contact relay called without RESEND_API_KEY configured");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayError::MissingFields => StatusCode::BAD_REQUEST,
            RelayError::Provider(msg) => {
                error!("Mail provider error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the relay router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(handle_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "clinic-leads",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// POST /api/contact
async fn handle_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<serde_json::Value>, RelayError> {
    let mailer = state.mailer.as_ref().ok_or(RelayError::Unconfigured)?;

    let name = required(&payload.name)?;
    let email = required(&payload.email)?;
    let message = required(&payload.message)?;

    let subject = format!("{} New inquiry: {}", SUBJECT_PREFIX, name);
    let outbound = OutboundEmail {
        from: state.config.resend_from.clone(),
        to: vec![state.config.contact_email.clone()],
        reply_to: email.to_string(),
        subject,
        html: build_lead_email(name, email, &payload, message),
    };

    let id = mailer
        .send(&outbound)
        .await
        .map_err(|e| RelayError::Provider(e.to_string()))?;

    info!("Relayed contact form message, delivery id {}", id);
    Ok(Json(json!({ "success": true, "id": id })))
}

fn required(field: &Option<String>) -> Result<&str, RelayError> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RelayError::MissingFields),
    }
}

fn optional(field: &Option<String>) -> &str {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => "-",
    }
}

/// Render the notification email body. User-supplied text is HTML-escaped;
/// message newlines become `<br>`.
fn build_lead_email(name: &str, email: &str, payload: &ContactPayload, message: &str) -> String {
    let received = Utc::now().format("%Y-%m-%d %H:%M UTC");
    format!(
        "<h2>New contact form message</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Treatment:</strong> {}</p>\n\
         <p><strong>Dates:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n\
         <p><em>Received {}</em></p>",
        escape_html(name),
        escape_html(email),
        escape_html(optional(&payload.phone)),
        escape_html(optional(&payload.treatment)),
        escape_html(optional(&payload.dates)),
        escape_html(message).replace('\n', "<br>"),
        received,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
