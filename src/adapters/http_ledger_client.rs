use anyhow::{bail, Context as _};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::ledger_client::{LedgerClient, LedgerReply};
use crate::rsvp::Vote;

/// Vote ledger reached over HTTP
pub struct HttpLedgerClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpLedgerClient {
    pub fn new(endpoint: Url) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client, endpoint })
    }

    /// Get the endpoint URL (for testing)
    #[cfg(test)]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn submit_vote(&self, vote: &Vote) -> anyhow::Result<LedgerReply> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(vote)
            .send()
            .await
            .context("Sending vote to ledger")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Vote ledger returned status {status}");
        }

        let reply = response
            .json::<LedgerReply>()
            .await
            .context("Parsing ledger reply")?;

        debug!(ok = reply.ok, has_totals = reply.totals.is_some(), "Ledger reply received");

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_ledger_client_creation() {
        let url = Url::parse("https://example.com/ledger").unwrap();
        let client = HttpLedgerClient::new(url);
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_getter() {
        let url_str = "https://example.com/ledger";
        let url = Url::parse(url_str).unwrap();
        let client = HttpLedgerClient::new(url).unwrap();
        assert_eq!(client.endpoint().as_str(), url_str);
    }
}
