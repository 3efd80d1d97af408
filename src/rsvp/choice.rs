use serde::Serialize;

/// The three RSVP choices
///
/// Dispatch from a clicked component identifier is total: an unmapped
/// identifier yields `None` and is routed to an "unknown action" reply,
/// never a default vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RsvpChoice {
    Yes,
    No,
    Maybe,
}

impl RsvpChoice {
    /// Map a clicked component identifier to a choice
    pub fn from_custom_id(custom_id: &str) -> Option<RsvpChoice> {
        match custom_id {
            "rsvp_yes" => Some(RsvpChoice::Yes),
            "rsvp_no" => Some(RsvpChoice::No),
            "rsvp_maybe" => Some(RsvpChoice::Maybe),
            _ => None,
        }
    }

    pub fn custom_id(&self) -> &'static str {
        match self {
            RsvpChoice::Yes => "rsvp_yes",
            RsvpChoice::No => "rsvp_no",
            RsvpChoice::Maybe => "rsvp_maybe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RsvpChoice::Yes => "Yes",
            RsvpChoice::No => "No",
            RsvpChoice::Maybe => "Maybe",
        }
    }
}
