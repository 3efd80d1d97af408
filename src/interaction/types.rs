use serde::Deserialize;
use serde_json::Value;

/// Classified interaction type
///
/// Wire values: 1 = Ping, 2 = ApplicationCommand, 3 = MessageComponent.
/// Anything else is unclassifiable and rejected by the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    MessageComponent,
}

impl InteractionKind {
    pub fn from_raw(raw: u8) -> Option<InteractionKind> {
        match raw {
            1 => Some(InteractionKind::Ping),
            2 => Some(InteractionKind::ApplicationCommand),
            3 => Some(InteractionKind::MessageComponent),
            _ => None,
        }
    }
}

/// One inbound signed event from the chat platform
///
/// Exists only for the duration of one request; nothing here is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Raw interaction type discriminant
    #[serde(rename = "type")]
    pub kind: u8,

    /// One-time token scoped to this interaction; sufficient to edit the
    /// originating message without a long-lived bot credential
    #[serde(default)]
    pub token: String,

    pub data: Option<InteractionData>,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub message: Option<InteractionMessage>,
    pub channel_id: Option<String>,
}

/// Command invocation data or clicked-component identifier
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    /// Command name (command invocations only)
    pub name: Option<String>,

    /// Typed option list (command invocations only)
    #[serde(default)]
    pub options: Vec<CommandOption>,

    /// Identifier of the clicked component (component clicks only)
    pub custom_id: Option<String>,
}

impl InteractionData {
    /// Look up a string option by name
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.value.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Global display name, if the user has set one
    pub global_name: Option<String>,
}

/// Server-scoped identity wrapper around a user
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    /// Per-server nickname
    pub nick: Option<String>,
    pub user: Option<User>,
}

/// The message a component click is acting on
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionMessage {
    pub id: String,
    #[serde(default)]
    pub content: String,

    /// Action components, kept as raw JSON so a later edit can pass them
    /// through byte-identical
    #[serde(default)]
    pub components: Value,
}

/// Normalized submitter identity extracted from an interaction
#[derive(Debug, Clone)]
pub struct Submitter {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub server_nick: Option<String>,
}

impl Submitter {
    /// Display identity precedence: server nick > global name > username
    pub fn display_name(&self) -> &str {
        self.server_nick
            .as_deref()
            .or(self.global_name.as_deref())
            .unwrap_or(&self.username)
    }
}

impl Interaction {
    /// Resolve the submitting user from `member.user`, falling back to the
    /// top-level `user` field (direct-message interactions)
    pub fn submitter(&self) -> Option<Submitter> {
        let server_nick = self.member.as_ref().and_then(|m| m.nick.clone());
        let user = self
            .member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())?;

        Some(Submitter {
            id: user.id.clone(),
            username: user.username.clone(),
            global_name: user.global_name.clone(),
            server_nick,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ping(1, Some(InteractionKind::Ping))]
    #[case::command(2, Some(InteractionKind::ApplicationCommand))]
    #[case::component(3, Some(InteractionKind::MessageComponent))]
    #[case::autocomplete(4, None)]
    #[case::zero(0, None)]
    fn test_kind_from_raw(#[case] raw: u8, #[case] expected: Option<InteractionKind>) {
        assert_eq!(InteractionKind::from_raw(raw), expected);
    }

    #[test]
    fn test_parse_ping() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert_eq!(interaction.kind, 1);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn test_parse_command_invocation() {
        let json = r#"{
            "type": 2,
            "token": "tok123",
            "data": {
                "name": "event",
                "options": [{"name": "title", "value": "Board Game Night"}]
            },
            "member": {"nick": null, "user": {"id": "42", "username": "alice", "global_name": "Alice"}}
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();

        let data = interaction.data.as_ref().unwrap();
        assert_eq!(data.name.as_deref(), Some("event"));
        assert_eq!(data.string_option("title"), Some("Board Game Night"));
        assert_eq!(data.string_option("missing"), None);
    }

    #[test]
    fn test_parse_component_click() {
        let json = r#"{
            "type": 3,
            "token": "tok456",
            "channel_id": "555",
            "data": {"custom_id": "rsvp_yes"},
            "message": {
                "id": "999",
                "content": "**Game Night**",
                "components": [{"type": 1, "components": []}]
            },
            "member": {"nick": "Al", "user": {"id": "42", "username": "alice", "global_name": "Alice"}}
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            interaction.data.as_ref().unwrap().custom_id.as_deref(),
            Some("rsvp_yes")
        );
        let message = interaction.message.as_ref().unwrap();
        assert_eq!(message.id, "999");
        assert!(message.components.is_array());
    }

    #[rstest]
    #[case::nick_wins(Some("Al"), Some("Alice"), "Al")]
    #[case::global_name_next(None, Some("Alice"), "Alice")]
    #[case::username_fallback(None, None, "alice")]
    fn test_display_name_precedence(
        #[case] nick: Option<&str>,
        #[case] global_name: Option<&str>,
        #[case] expected: &str,
    ) {
        let submitter = Submitter {
            id: "42".to_string(),
            username: "alice".to_string(),
            global_name: global_name.map(String::from),
            server_nick: nick.map(String::from),
        };
        assert_eq!(submitter.display_name(), expected);
    }

    #[test]
    fn test_submitter_falls_back_to_top_level_user() {
        let json = r#"{
            "type": 3,
            "user": {"id": "7", "username": "bob", "global_name": null}
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();

        let submitter = interaction.submitter().unwrap();
        assert_eq!(submitter.id, "7");
        assert_eq!(submitter.display_name(), "bob");
    }

    #[test]
    fn test_submitter_missing_everywhere() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":3}"#).unwrap();
        assert!(interaction.submitter().is_none());
    }
}
