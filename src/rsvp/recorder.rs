use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::choice::RsvpChoice;
use super::content::{build_content, extract_title};
use super::vote::Vote;
use crate::adapters::{LedgerClient, MessageEditor};
use crate::interaction::{Interaction, Submitter};

/// Everything a recognized component click carries into the recording flow
#[derive(Debug, Clone)]
pub struct ClickContext {
    pub choice: RsvpChoice,
    pub submitter: Submitter,
    pub message_id: String,
    pub message_content: String,
    /// Original action components, passed through to the edit untouched
    pub components: Value,
    pub channel_id: String,
    pub token: String,
}

impl ClickContext {
    /// Build a click context from a component-click interaction
    ///
    /// Returns `None` when the interaction is missing the message or the
    /// submitter; such a payload is malformed, not an unknown action.
    pub fn from_interaction(choice: RsvpChoice, interaction: &Interaction) -> Option<ClickContext> {
        let submitter = interaction.submitter()?;
        let message = interaction.message.as_ref()?;

        Some(ClickContext {
            choice,
            submitter,
            message_id: message.id.clone(),
            message_content: message.content.clone(),
            components: message.components.clone(),
            channel_id: interaction.channel_id.clone().unwrap_or_default(),
            token: interaction.token.clone(),
        })
    }
}

/// The ephemeral reply owed to every dispatched click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickReply {
    Recorded(RsvpChoice),
    Failed,
}

impl ClickReply {
    pub fn text(&self) -> String {
        match self {
            ClickReply::Recorded(choice) => format!("Recorded: **{}**", choice.label()),
            ClickReply::Failed => "Failed to record your RSVP, please try again.".to_string(),
        }
    }
}

/// Records RSVP votes in the ledger and reflects the returned tallies back
/// onto the originating message
pub struct RsvpRecorder<L, E>
where
    L: LedgerClient,
    E: MessageEditor,
{
    ledger: Arc<L>,
    editor: Arc<E>,
}

impl<L, E> RsvpRecorder<L, E>
where
    L: LedgerClient,
    E: MessageEditor,
{
    pub fn new(ledger: Arc<L>, editor: Arc<E>) -> Self {
        Self { ledger, editor }
    }

    /// Handle one recognized component click
    ///
    /// Submits the vote to the ledger, then rewrites the message with the
    /// returned totals. The edit is awaited before returning so edits land
    /// in click order, but its outcome never changes the reply: once the
    /// write is confirmed the user gets the success acknowledgement.
    pub async fn record_click(&self, click: &ClickContext) -> ClickReply {
        debug!(
            message_id = %click.message_id,
            choice = ?click.choice,
            user_id = %click.submitter.id,
            "Processing RSVP click"
        );

        let title = self.derive_title(click);
        let vote = self.build_vote(click, &title);

        let reply = match self.ledger.submit_vote(&vote).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(
                    ?err,
                    message_id = %click.message_id,
                    "Failed to submit vote to ledger"
                );
                return ClickReply::Failed;
            }
        };

        if !reply.ok {
            warn!(
                message_id = %click.message_id,
                event_title = %title,
                "Ledger rejected vote"
            );
            return ClickReply::Failed;
        }

        // Vote is durably recorded from here on; edit problems are logged
        // but never surfaced to the clicking user.
        match reply.totals {
            Some(totals) => {
                let content = build_content(&title, &totals);
                match self
                    .editor
                    .edit_original(&click.token, &content, &click.components)
                    .await
                {
                    Ok(()) => {
                        info!(
                            message_id = %click.message_id,
                            yes = totals.yes,
                            no = totals.no,
                            maybe = totals.maybe,
                            "Updated RSVP tallies on message"
                        );
                    }
                    Err(err) => {
                        error!(
                            ?err,
                            message_id = %click.message_id,
                            "Vote recorded but message edit failed"
                        );
                    }
                }
            }
            None => {
                warn!(
                    message_id = %click.message_id,
                    "Ledger accepted vote but returned no totals, skipping edit"
                );
            }
        }

        ClickReply::Recorded(click.choice)
    }

    /// Event title from the current message content, with a synthesized
    /// fallback when the title line is lost or malformed
    fn derive_title(&self, click: &ClickContext) -> String {
        let title = extract_title(&click.message_content);
        if title.is_empty() {
            format!("event-{}", click.message_id)
        } else {
            title
        }
    }

    fn build_vote(&self, click: &ClickContext, title: &str) -> Vote {
        Vote {
            event_title: title.to_string(),
            user_id: click.submitter.id.clone(),
            username: click.submitter.username.clone(),
            global_name: click.submitter.global_name.clone(),
            server_nick: click.submitter.server_nick.clone(),
            display_name: click.submitter.display_name().to_string(),
            choice: click.choice,
            timestamp: chrono::Utc::now().to_rfc3339(),
            message_id: click.message_id.clone(),
            channel_id: click.channel_id.clone(),
        }
    }
}
