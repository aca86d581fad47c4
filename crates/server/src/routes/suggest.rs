use axum::{Extension, Json};

use chat_core::protocol::{SuggestRequest, SuggestResponse};

use crate::clients::upstream::{UpstreamClient, UpstreamError};
use crate::error::AppError;
use crate::normalize;

/// Substituted when a successful upstream reply normalizes to nothing, so
/// the chat transcript never shows a blank AI turn.
const EMPTY_SUGGESTION_FALLBACK: &str = "Sorry, no suggestion generated.";

/// POST /api/chess-move-suggestion
/// Relay the caller's message list to the upstream chat-completion API
/// and answer with one flat suggestion string.
pub async fn suggest_move(
    Extension(upstream): Extension<UpstreamClient>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if req.messages.is_empty() {
        return Err(AppError::BadRequest("messages cannot be empty".into()));
    }

    tracing::info!(
        "Relaying suggestion request ({} messages)",
        req.messages.len()
    );

    let raw = upstream.complete(&req.messages).await.map_err(|e| match e {
        UpstreamError::Transport(err) => AppError::UpstreamCall(err.to_string()),
        UpstreamError::Rejected { status, body } => AppError::UpstreamRejected {
            status,
            details: body,
        },
    })?;

    let mut suggestion =
        normalize::normalize(&raw).map_err(|e| AppError::UpstreamParse(e.to_string()))?;

    if suggestion.is_empty() {
        tracing::warn!("No suggestion text found in upstream response");
        suggestion = EMPTY_SUGGESTION_FALLBACK.to_string();
    }

    Ok(Json(SuggestResponse { suggestion }))
}
