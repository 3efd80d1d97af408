use async_trait::async_trait;
use serde::Deserialize;

use crate::rsvp::{Totals, Vote};

/// Reply from the vote ledger after a write
///
/// `ok: false` means the ledger rejected the vote at the application level
/// even though the HTTP exchange succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LedgerReply {
    pub ok: bool,
    pub totals: Option<Totals>,
}

/// Interface to the external vote ledger
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit one vote and return the ledger's reply
    ///
    /// # Returns
    ///
    /// * `Ok(LedgerReply)` - the ledger answered with a success status
    /// * `Err(_)` - transport failure or non-success HTTP status
    async fn submit_vote(&self, vote: &Vote) -> anyhow::Result<LedgerReply>;
}
