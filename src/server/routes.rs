//! HTTP route handlers for the support relay API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::completion::{ChatMessage, ChatRole};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-reply", post(generate_reply))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "support-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Inbound conversation payload.
///
/// Normally an ordered list of role/content messages. A bare string is also
/// accepted and wrapped as a single user message, the typed rendition of an
/// older single-message request shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ConversationPayload {
    /// Ordered role/content history, oldest first.
    Messages(Vec<ChatMessage>),
    /// Legacy single-message form.
    Single(String),
}

impl ConversationPayload {
    /// Convert the payload into a typed message list.
    #[must_use]
    pub fn into_messages(self) -> Vec<ChatMessage> {
        match self {
            Self::Messages(messages) => messages,
            Self::Single(content) => vec![ChatMessage::new(ChatRole::User, content)],
        }
    }
}

/// Reply generation request.
#[derive(Debug, Deserialize)]
pub struct GenerateReplyRequest {
    /// Conversation history.
    pub messages: ConversationPayload,
}

/// Reply generation response.
#[derive(Debug, Serialize)]
pub struct GenerateReplyResponse {
    /// Sanitized assistant reply.
    pub reply: String,
}

/// Handle reply generation requests.
///
/// Pipeline: completion client, then sanitizer. Every failure maps to the
/// same generic server error with the underlying message as detail; callers
/// get no differentiated error codes.
async fn generate_reply(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateReplyRequest>,
) -> Result<Json<GenerateReplyResponse>, (StatusCode, String)> {
    let messages = request.messages.into_messages();

    let raw_reply = state
        .completion
        .generate_reply(&messages)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let reply = state.sanitizer.sanitize(&raw_reply);

    Ok(Json(GenerateReplyResponse { reply }))
}
