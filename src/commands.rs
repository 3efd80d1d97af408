//! Global command registration
//!
//! One-shot idempotent PUT of the command catalog, run out-of-band by the
//! `register` binary. The interactions handler never touches this path.

use anyhow::{bail, Context as _};
use serde::Serialize;

use crate::params::Params;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Option type: string
const OPTION_STRING: u8 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<CommandOptionDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandOptionDescriptor {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// The single recognized command: `/event title:<string>`
pub fn event_command() -> CommandDescriptor {
    CommandDescriptor {
        name: "event",
        description: "Post an RSVP message with buttons",
        options: vec![CommandOptionDescriptor {
            kind: OPTION_STRING,
            name: "title",
            description: "Event title",
            required: true,
        }],
    }
}

/// Replace the application's global command catalog
pub async fn register_global(params: &Params) -> anyhow::Result<()> {
    let token = params
        .discord_token
        .as_deref()
        .context("DISCORD_TOKEN is required for command registration")?;

    let url = format!(
        "{}/applications/{}/commands",
        DISCORD_API_BASE, params.discord_application_id
    );

    let client = reqwest::ClientBuilder::new()
        .build()
        .context("Building HTTP Client")?;

    let response = client
        .put(&url)
        .header("Authorization", format!("Bot {token}"))
        .json(&vec![event_command()])
        .send()
        .await
        .context("Sending command registration")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Command registration returned status {status}: {body}");
    }

    Ok(())
}
