use anyhow::{bail, Context as _};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::message_editor::MessageEditor;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

#[derive(Serialize)]
struct EditMessageBody<'a> {
    content: &'a str,
    components: &'a Value,
}

/// Edits the originating message through the per-interaction webhook,
/// authorized by the one-time interaction token alone
pub struct HttpMessageEditor {
    client: reqwest::Client,
    application_id: String,
}

impl HttpMessageEditor {
    pub fn new(application_id: String) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .context("Building HTTP Client")?;

        Ok(Self {
            client,
            application_id,
        })
    }

    fn edit_url(&self, token: &str) -> String {
        format!(
            "{}/webhooks/{}/{}/messages/@original",
            DISCORD_API_BASE, self.application_id, token
        )
    }
}

#[async_trait]
impl MessageEditor for HttpMessageEditor {
    async fn edit_original(
        &self,
        token: &str,
        content: &str,
        components: &Value,
    ) -> anyhow::Result<()> {
        let body = EditMessageBody {
            content,
            components,
        };

        let response = self
            .client
            .patch(self.edit_url(token))
            .json(&body)
            .send()
            .await
            .context("Sending message edit")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Message edit returned status {status}");
        }

        Ok(())
    }
}
