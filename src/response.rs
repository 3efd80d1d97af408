//! Wire-level interaction response bodies
//!
//! Pure constructors for the platform's response envelope; no I/O happens
//! here. The HTTP layer serializes these with `axum::Json`, which sets the
//! JSON content type.

use serde::Serialize;

use crate::rsvp::RsvpChoice;

/// Response type: acknowledgement of a ping
const RESPONSE_PONG: u8 = 1;
/// Response type: immediate channel message
const RESPONSE_CHANNEL_MESSAGE: u8 = 4;

/// Message flag restricting visibility to the submitting user
const FLAG_EPHEMERAL: u64 = 64;

/// Component type: action row container
const COMPONENT_ACTION_ROW: u8 = 1;
/// Component type: button
const COMPONENT_BUTTON: u8 = 2;

/// Button style: green
const STYLE_SUCCESS: u8 = 3;
/// Button style: red
const STYLE_DANGER: u8 = 4;
/// Button style: gray
const STYLE_SECONDARY: u8 = 2;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResponseData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: u8,
    pub components: Vec<Button>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: u8,
    pub style: u8,
    pub label: String,
    pub custom_id: String,
    pub emoji: Emoji,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Emoji {
    pub name: String,
}

/// Acknowledgement for a handshake ping
pub fn pong() -> InteractionResponse {
    InteractionResponse {
        kind: RESPONSE_PONG,
        data: None,
    }
}

/// Reply visible only to the submitting user
pub fn ephemeral(content: impl Into<String>) -> InteractionResponse {
    InteractionResponse {
        kind: RESPONSE_CHANNEL_MESSAGE,
        data: Some(ResponseData {
            content: content.into(),
            flags: Some(FLAG_EPHEMERAL),
            components: None,
        }),
    }
}

/// Public RSVP message: bolded title, instruction line, one row of three
/// mutually exclusive choice buttons
pub fn rsvp_message(title: &str) -> InteractionResponse {
    let buttons = vec![
        button(RsvpChoice::Yes, STYLE_SUCCESS, "✅"),
        button(RsvpChoice::No, STYLE_DANGER, "❌"),
        button(RsvpChoice::Maybe, STYLE_SECONDARY, "🤔"),
    ];

    InteractionResponse {
        kind: RESPONSE_CHANNEL_MESSAGE,
        data: Some(ResponseData {
            content: format!("**{}**\nRSVP with the buttons below:", title),
            flags: None,
            components: Some(vec![ActionRow {
                kind: COMPONENT_ACTION_ROW,
                components: buttons,
            }]),
        }),
    }
}

fn button(choice: RsvpChoice, style: u8, emoji: &str) -> Button {
    Button {
        kind: COMPONENT_BUTTON,
        style,
        label: choice.label().to_string(),
        custom_id: choice.custom_id().to_string(),
        emoji: Emoji {
            name: emoji.to_string(),
        },
    }
}
