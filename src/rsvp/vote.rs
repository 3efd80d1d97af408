use serde::{Deserialize, Serialize};

use super::choice::RsvpChoice;

/// One normalized vote, handed to the external ledger and never retained
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub event_title: String,
    pub user_id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub server_nick: Option<String>,
    pub display_name: String,
    pub choice: RsvpChoice,
    /// RFC 3339 timestamp captured at click time
    pub timestamp: String,
    pub message_id: String,
    pub channel_id: String,
}

/// Aggregate counts per event, supplied by the ledger
///
/// Authoritative; this system never computes counts itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub yes: u64,
    #[serde(default)]
    pub no: u64,
    #[serde(default)]
    pub maybe: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_serializes_camel_case() {
        let vote = Vote {
            event_title: "Board Game Night".to_string(),
            user_id: "42".to_string(),
            username: "alice".to_string(),
            global_name: Some("Alice".to_string()),
            server_nick: None,
            display_name: "Alice".to_string(),
            choice: RsvpChoice::Yes,
            timestamp: "2024-05-01T18:00:00+00:00".to_string(),
            message_id: "999".to_string(),
            channel_id: "555".to_string(),
        };

        let json = serde_json::to_value(&vote).unwrap();
        assert_eq!(json["eventTitle"], "Board Game Night");
        assert_eq!(json["userId"], "42");
        assert_eq!(json["globalName"], "Alice");
        assert_eq!(json["serverNick"], serde_json::Value::Null);
        assert_eq!(json["displayName"], "Alice");
        assert_eq!(json["choice"], "Yes");
        assert_eq!(json["messageId"], "999");
        assert_eq!(json["channelId"], "555");
    }

    #[test]
    fn test_totals_default_missing_fields_to_zero() {
        let totals: Totals = serde_json::from_str(r#"{"yes": 3}"#).unwrap();
        assert_eq!(
            totals,
            Totals {
                yes: 3,
                no: 0,
                maybe: 0
            }
        );
    }
}
