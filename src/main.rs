use std::sync::Arc;

use anyhow::Context as _;
use tracing::info;

use rsvphook::adapters::{HttpLedgerClient, HttpMessageEditor};
use rsvphook::params::Params;
use rsvphook::rsvp::RsvpRecorder;
use rsvphook::server::{self, AppState, DiagStatus};
use rsvphook::verify;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rsvphook=info".into()),
        )
        .init();

    // Display startup banner with version information
    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    let verifying_key = verify::parse_public_key(&params.discord_public_key)
        .context("Parsing DISCORD_PUBLIC_KEY")?;

    let ledger_endpoint =
        url::Url::parse(&params.ledger_endpoint).context("Parsing LEDGER_ENDPOINT URL")?;
    let ledger = Arc::new(HttpLedgerClient::new(ledger_endpoint)?);
    let editor = Arc::new(HttpMessageEditor::new(
        params.discord_application_id.clone(),
    )?);

    let state = Arc::new(AppState {
        verifying_key,
        recorder: RsvpRecorder::new(ledger, editor),
        diag: DiagStatus::from_params(&params),
    });

    let listener = tokio::net::TcpListener::bind(&params.bind_address)
        .await
        .context("Binding listen address")?;
    info!(address = %params.bind_address, "Listening for interactions");

    axum::serve(listener, server::router(state))
        .await
        .context("Running HTTP server")
}
