use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use clinic_leads::config::Config;
use clinic_leads::relay::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_leads=info".parse()?),
        )
        .init();

    info!("Starting clinic-leads mail relay");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    if config.resend_api_key.is_none() {
        warn!("RESEND_API_KEY not set; /api/contact will answer with a configuration error");
    }

    let state = Arc::new(AppState::from_config(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
