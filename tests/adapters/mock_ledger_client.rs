use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use serde_json::Value;

use rsvphook::adapters::{LedgerClient, LedgerReply};
use rsvphook::rsvp::{Totals, Vote};

#[derive(Clone, Copy)]
enum Behavior {
    Reply(LedgerReply),
    TransportError,
}

pub struct MockLedgerClient {
    pub submitted: Arc<Mutex<Vec<Value>>>,
    behavior: Behavior,
}

#[allow(dead_code)]
impl MockLedgerClient {
    /// Ledger that accepts votes and answers with the given totals
    pub fn with_totals(totals: Totals) -> Self {
        Self::with_reply(LedgerReply {
            ok: true,
            totals: Some(totals),
        })
    }

    pub fn with_reply(reply: LedgerReply) -> Self {
        Self {
            submitted: Arc::new(Mutex::new(Vec::new())),
            behavior: Behavior::Reply(reply),
        }
    }

    /// Ledger that reports a logical failure in a successful HTTP reply
    pub fn rejecting() -> Self {
        Self::with_reply(LedgerReply {
            ok: false,
            totals: None,
        })
    }

    /// Ledger whose write call fails at the transport level
    pub fn failing() -> Self {
        Self {
            submitted: Arc::new(Mutex::new(Vec::new())),
            behavior: Behavior::TransportError,
        }
    }

    pub fn submitted_votes(&self) -> Vec<Value> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn submit_vote(&self, vote: &Vote) -> anyhow::Result<LedgerReply> {
        self.submitted
            .lock()
            .unwrap()
            .push(serde_json::to_value(vote)?);

        match self.behavior {
            Behavior::Reply(reply) => Ok(reply),
            Behavior::TransportError => bail!("simulated transport failure"),
        }
    }
}
