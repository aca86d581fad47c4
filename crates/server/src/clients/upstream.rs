//! HTTP client for the upstream chat-completion endpoint.

use reqwest::Client;
use serde::Serialize;

use chat_core::protocol::OutboundMessage;

use crate::config::Config;

/// Model requested from the upstream for every relay call.
const MODEL: &str = "gpt-4.1-mini";

/// Fixed request envelope the upstream expects. The trailing flags are
/// upstream-specific toggles the relay always leaves off.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: &'a [OutboundMessage],
    #[serde(rename = "isSubscribed")]
    is_subscribed: bool,
    web_search: bool,
    reason: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
    api_key: String,
    user_id: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent("SideboardChat/1.0")
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap();
        Self {
            client,
            url: config.upstream_url.clone(),
            api_key: config.upstream_api_key.clone(),
            user_id: config.upstream_user_id.clone(),
        }
    }

    /// Issue one non-streaming completion call and return the raw body.
    /// Exactly one attempt per caller request; no retries.
    pub async fn complete(&self, messages: &[OutboundMessage]) -> Result<String, UpstreamError> {
        let payload = CompletionRequest {
            model: MODEL,
            stream: false,
            messages,
            is_subscribed: false,
            web_search: false,
            reason: false,
        };

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("x-user-id", &self.user_id)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.text().await?)
    }
}
