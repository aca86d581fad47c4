use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to call upstream API: {0}")]
    UpstreamCall(String),

    #[error("Upstream API error {status}: {details}")]
    UpstreamRejected { status: u16, details: String },

    #[error("Failed to parse upstream response: {0}")]
    UpstreamParse(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::UpstreamCall(details) => {
                tracing::error!("Failed to call upstream API: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to call upstream API", "details": details }),
                )
            }
            // Upstream rejections pass the status and body through verbatim
            // so callers can debug against the upstream's own diagnostics.
            AppError::UpstreamRejected { status, details } => {
                tracing::error!("Upstream API error: {status} {details}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    json!({ "error": "Upstream API error", "status": status, "details": details }),
                )
            }
            AppError::UpstreamParse(details) => {
                tracing::error!("Failed to parse upstream response: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to parse upstream response", "details": details }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            AppError::Anyhow(e) => {
                tracing::error!("Unexpected error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
