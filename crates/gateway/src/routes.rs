//! HTTP route handlers for the gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health    - Liveness check
//! POST /updates   - Webhook endpoint for the messaging gateway
//! ```
//!
//! `/updates` is the single parse boundary: button payloads and command text
//! are turned into typed [`Action`]s and [`Command`]s here, and everything
//! past this point matches over the typed variants. Malformed payloads and
//! unknown commands are answered with status 200 and a transient notice -
//! they are user input, not transport failures.

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bonbon_core::{Action, Command, Notice, RenderInstruction, Screen, SessionId};

use crate::config::token_matches;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// The HTTP header carrying the shared gateway secret.
pub const GATEWAY_TOKEN_HEADER: &str = "x-gateway-token";

/// Create all routes for the gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/updates", post(updates))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// An incoming update from the messaging gateway.
///
/// Exactly one of `callback` (a button-press payload) or `text` (a typed
/// message) is expected; when both are present the button press wins, since
/// transports never deliver the two together.
#[derive(Debug, Deserialize)]
pub struct Update {
    /// Opaque session identity.
    pub session_id: i64,
    /// Display name of the user, if the transport shares it.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Message text (commands start with `/`).
    #[serde(default)]
    pub text: Option<String>,
    /// Button-press payload.
    #[serde(default)]
    pub callback: Option<String>,
}

/// A transient notice on the wire: machine-readable code plus display text.
#[derive(Debug, Serialize)]
pub struct NoticeBody {
    pub code: Notice,
    pub message: &'static str,
}

/// Response body for `/updates`.
#[derive(Debug, Serialize)]
pub struct DispatchBody {
    /// Screen to display, or `null` to leave the current one unchanged.
    pub screen: Option<Screen>,
    /// Transient notice to surface, if any.
    pub notice: Option<NoticeBody>,
}

impl From<RenderInstruction> for DispatchBody {
    fn from(instruction: RenderInstruction) -> Self {
        Self {
            screen: instruction.screen,
            notice: instruction.notice.map(|notice| NoticeBody {
                code: notice,
                message: notice.message(),
            }),
        }
    }
}

/// Webhook endpoint: dispatch one update into the shop engine.
#[instrument(skip(state, headers, update), fields(session_id = update.session_id))]
async fn updates(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> Result<Json<DispatchBody>> {
    authorize(&state, &headers)?;

    let session = SessionId::new(update.session_id);
    let engine = state.engine();

    let instruction = if let Some(payload) = update.callback.as_deref() {
        match Action::parse(payload) {
            Ok(action) => engine.handle_action(session, &action),
            Err(err) => {
                tracing::debug!(%err, "payload failed to parse");
                engine.unknown_action(session, payload)
            }
        }
    } else if let Some(text) = update.text.as_deref() {
        match Command::parse(text) {
            Ok(command) => engine.handle_command(session, &command, update.user_name.as_deref()),
            Err(err) => {
                tracing::debug!(%err, "text failed to parse as a command");
                engine.unknown_command(session, text)
            }
        }
    } else {
        return Err(AppError::BadRequest(
            "update carries neither text nor callback".to_string(),
        ));
    };

    Ok(Json(DispatchBody::from(instruction)))
}

/// Check the shared gateway token on an incoming webhook call.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<()> {
    let presented = headers
        .get(GATEWAY_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;
    if token_matches(state.config(), presented) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}
