use anyhow::Context as _;
use serde::Deserialize;

/// Default bind address for the interactions endpoint
fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Deserialize, Clone)]
pub struct Params {
    /// Discord application ID (used for the message-edit URL and registration)
    pub discord_application_id: String,

    /// Hex-encoded ed25519 public key used to verify interaction signatures
    pub discord_public_key: String,

    /// Endpoint of the external vote ledger
    pub ledger_endpoint: String,

    /// Bot token; only required by the `register` binary
    #[serde(default)]
    pub discord_token: Option<String>,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        if s.is_empty() {
            return "<empty>".to_string();
        }
        return format!("{}***", &s[..1]);
    }

    format!(
        "{}***{}",
        &s[..VISIBLE_CHARS],
        &s[s.len() - VISIBLE_CHARS..]
    )
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_application_id", &self.discord_application_id)
            .field("discord_public_key", &self.discord_public_key)
            .field("ledger_endpoint", &self.ledger_endpoint)
            .field(
                "discord_token",
                &self.discord_token.as_deref().map(mask_token),
            )
            .field("bind_address", &self.bind_address)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }
}
