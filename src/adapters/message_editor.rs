use async_trait::async_trait;
use serde_json::Value;

/// Interface for editing the message an interaction originated from
#[async_trait]
pub trait MessageEditor: Send + Sync {
    /// Rewrite the original message's content in place
    ///
    /// # Arguments
    ///
    /// * `token` - the interaction's one-time token
    /// * `content` - replacement message content
    /// * `components` - the original action components, passed through
    ///   unchanged so the buttons stay clickable
    async fn edit_original(&self, token: &str, content: &str, components: &Value)
    -> anyhow::Result<()>;
}
