//! Inbound HTTP surface
//!
//! One POST route carries every interaction. The raw body bytes are verified
//! before any JSON parsing; an unauthenticated request never reaches the
//! decoder.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ed25519_dalek::VerifyingKey;
use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::{LedgerClient, MessageEditor};
use crate::interaction::{Interaction, InteractionKind};
use crate::params::Params;
use crate::response;
use crate::rsvp::{ClickContext, RsvpChoice, RsvpRecorder};
use crate::verify;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Shared per-process state, built once at startup
///
/// Generic over the outbound collaborators so tests can inject mocks.
pub struct AppState<L, E>
where
    L: LedgerClient,
    E: MessageEditor,
{
    pub verifying_key: VerifyingKey,
    pub recorder: RsvpRecorder<L, E>,
    pub diag: DiagStatus,
}

/// Liveness snapshot exposing only presence and lengths of configured
/// secrets, never their values
#[derive(Debug, Clone, Serialize)]
pub struct DiagStatus {
    pub status: &'static str,
    pub application_id_len: usize,
    pub public_key_len: usize,
    pub ledger_endpoint_set: bool,
    pub discord_token_set: bool,
}

impl DiagStatus {
    pub fn from_params(params: &Params) -> DiagStatus {
        DiagStatus {
            status: "up",
            application_id_len: params.discord_application_id.len(),
            public_key_len: params.discord_public_key.len(),
            ledger_endpoint_set: !params.ledger_endpoint.is_empty(),
            discord_token_set: params.discord_token.is_some(),
        }
    }
}

/// Build the interaction router
///
/// Methods other than the registered ones get axum's 405.
pub fn router<L, E>(state: Arc<AppState<L, E>>) -> Router
where
    L: LedgerClient + 'static,
    E: MessageEditor + 'static,
{
    Router::new()
        .route(
            "/",
            post(handle_interaction::<L, E>).get(diag::<L, E>),
        )
        .route("/diag", get(diag::<L, E>))
        .with_state(state)
}

async fn diag<L, E>(State(state): State<Arc<AppState<L, E>>>) -> Json<DiagStatus>
where
    L: LedgerClient,
    E: MessageEditor,
{
    Json(state.diag.clone())
}

/// Single entry point for all signed interactions
async fn handle_interaction<L, E>(
    State(state): State<Arc<AppState<L, E>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    L: LedgerClient,
    E: MessageEditor,
{
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|v| v.to_str().ok());

    // Header presence is all that gets logged on auth failures; the body
    // and key never appear in diagnostics.
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        warn!(
            has_signature = signature.is_some(),
            has_timestamp = timestamp.is_some(),
            "Rejecting request with missing signature headers"
        );
        return (StatusCode::UNAUTHORIZED, "Missing signature headers").into_response();
    };

    if !verify::verify_signature(&state.verifying_key, signature, timestamp, &body) {
        warn!("Rejecting request with invalid signature");
        return (StatusCode::UNAUTHORIZED, "Bad request signature").into_response();
    }

    // Only parse after verification succeeds
    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(err) => {
            warn!(?err, "Verified payload is not a parseable interaction");
            return (StatusCode::BAD_REQUEST, "Malformed interaction payload").into_response();
        }
    };

    match InteractionKind::from_raw(interaction.kind) {
        Some(InteractionKind::Ping) => Json(response::pong()).into_response(),
        Some(InteractionKind::ApplicationCommand) => handle_command(&interaction).into_response(),
        Some(InteractionKind::MessageComponent) => handle_click(&state, &interaction).await,
        None => {
            warn!(kind = interaction.kind, "Unhandled interaction type");
            (StatusCode::BAD_REQUEST, "Unhandled interaction type").into_response()
        }
    }
}

/// Command invocation: the `event` command posts the RSVP message, anything
/// else gets an ephemeral notice and no side effects
fn handle_command(interaction: &Interaction) -> Json<response::InteractionResponse> {
    let data = interaction.data.as_ref();
    let name = data.and_then(|d| d.name.as_deref()).unwrap_or("");

    if !name.eq_ignore_ascii_case("event") {
        info!(command = %name, "Unknown command invoked");
        return Json(response::ephemeral(format!("Unknown command: {name}")));
    }

    let Some(title) = data.and_then(|d| d.string_option("title")) else {
        info!("Event command invoked without a title");
        return Json(response::ephemeral("The event command needs a title."));
    };

    info!(title = %title, "Posting RSVP message");
    Json(response::rsvp_message(title))
}

/// Component click: dispatch on the clicked identifier, record the vote,
/// and acknowledge ephemerally
async fn handle_click<L, E>(state: &AppState<L, E>, interaction: &Interaction) -> Response
where
    L: LedgerClient,
    E: MessageEditor,
{
    let custom_id = interaction
        .data
        .as_ref()
        .and_then(|d| d.custom_id.as_deref())
        .unwrap_or("");

    let Some(choice) = RsvpChoice::from_custom_id(custom_id) else {
        info!(custom_id = %custom_id, "Unknown action identifier clicked");
        return Json(response::ephemeral("Unknown action.")).into_response();
    };

    let Some(click) = ClickContext::from_interaction(choice, interaction) else {
        warn!("Component click is missing message or submitter");
        return (StatusCode::BAD_REQUEST, "Malformed interaction payload").into_response();
    };

    let reply = state.recorder.record_click(&click).await;
    Json(response::ephemeral(reply.text())).into_response()
}
