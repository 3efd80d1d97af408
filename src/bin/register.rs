//! Out-of-band global command registration
//!
//! Run once after configuration changes; the PUT replaces the whole catalog
//! so repeated runs are idempotent.

use tracing::info;

use rsvphook::commands;
use rsvphook::params::Params;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rsvphook=info".into()),
        )
        .init();

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    commands::register_global(&params).await?;
    info!("Registered commands globally");

    Ok(())
}
