//! Chat transcript types.
//!
//! The transcript is the only shared mutable state in the pipeline. It is
//! append-only: entries are never edited or removed once stored.

use serde::{Deserialize, Serialize};

/// Prefix that marks an AI reply. The rendering layer infers the "AI"
/// author from it when `username` is empty.
pub const AI_PREFIX: &str = "[AI Suggestion]: ";

/// One chat entry. An empty `username` means the entry was produced by
/// the system/AI rather than a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: content.into(),
        }
    }

    /// AI-authored entry: empty username plus the sentinel prefix.
    pub fn ai_suggestion(suggestion: &str) -> Self {
        Self {
            username: String::new(),
            content: format!("{AI_PREFIX}{suggestion}"),
        }
    }

    pub fn is_ai(&self) -> bool {
        self.username.is_empty() && self.content.starts_with(AI_PREFIX)
    }
}

/// Append-only chat transcript, oldest-first in storage. The UI reads
/// `newest_first` for display.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The only mutation: push a new entry at the end.
    pub fn append(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
