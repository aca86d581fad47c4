//! Wire types shared between the caller-side gateway and the relay.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    System,
}

/// Message content is either a plain string or a list of typed text parts.
/// Upstream accepts both shapes, so the relay must pass both through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub role: ChatRole,
    pub content: MessageContent,
}

impl OutboundMessage {
    /// Build a user-role message wrapping a plain prompt string.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: MessageContent::Text(content.into()),
        }
    }
}

/// Body of POST /api/chess-move-suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub messages: Vec<OutboundMessage>,
}

/// Success body returned by the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}
