//! Caller-side gateway to the suggestion relay.
//!
//! The gateway never panics past its boundary: every outcome is a tagged
//! `Result` the controller can collapse into a chat entry.

use async_trait::async_trait;
use serde_json::Value;

use crate::protocol::{OutboundMessage, SuggestRequest, SuggestResponse};

/// Failure modes surfaced by a gateway call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("failed to reach relay: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected request ({status}): {details}")]
    Rejected { status: u16, details: String },

    #[error("unexpected relay response: {0}")]
    Malformed(String),
}

/// Anything that can turn a prompt into a suggestion string.
#[async_trait]
pub trait SuggestionGateway: Send + Sync {
    async fn request(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// HTTP gateway that forwards prompts to the server-side relay endpoint.
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("SideboardChat/1.0")
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SuggestionGateway for HttpGateway {
    async fn request(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = SuggestRequest {
            messages: vec![OutboundMessage::user(prompt)],
        };

        let resp = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            // Error bodies are {error, status?, details?}; fall back to the
            // raw text when the body is not in that shape.
            let details = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| {
                    v.get("details")
                        .or_else(|| v.get("error"))
                        .and_then(Value::as_str)
                        .map(String::from)
                })
                .unwrap_or(text);
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                details,
            });
        }

        let parsed: SuggestResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::Malformed(e.to_string()))?;
        Ok(parsed.suggestion)
    }
}
