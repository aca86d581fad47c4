//! Orchestrates one user turn end to end: gate, echo, classify, build
//! prompt, relay call, reply.

use std::sync::Mutex;

use crate::classify;
use crate::gateway::SuggestionGateway;
use crate::message::{ChatMessage, Transcript};
use crate::prompt;

/// Shown in the transcript when the suggestion request fails, whatever
/// the cause. Failures are never silently dropped.
const FAILURE_REPLY: &str = "Sorry, AI suggestion failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerState {
    Idle,
    AwaitingReply,
}

/// Re-opens the gate when the turn ends, whichever way it ends.
struct InFlightGuard<'a> {
    state: &'a Mutex<ControllerState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap() = ControllerState::Idle;
    }
}

/// Drives chat turns for one conversation. Owns the transcript and the
/// single-in-flight-request state; at most one suggestion request is
/// outstanding at any time.
pub struct ChatController<G> {
    gateway: G,
    username: String,
    state: Mutex<ControllerState>,
    transcript: Mutex<Transcript>,
}

impl<G: SuggestionGateway> ChatController<G> {
    pub fn new(gateway: G, username: impl Into<String>) -> Self {
        Self {
            gateway,
            username: username.into(),
            state: Mutex::new(ControllerState::Idle),
            transcript: Mutex::new(Transcript::new()),
        }
    }

    /// Handle one user send. Returns false when the send was ignored:
    /// blank text, or a request already outstanding.
    ///
    /// An accepted send appends the user's message immediately (the echo
    /// does not wait on the AI outcome) and always appends exactly one
    /// reply entry — the suggestion, or a fixed fallback on any failure.
    pub async fn handle_send(&self, text: &str, moves: &[String], fen: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        // Check-and-set under one lock acquisition so two racing sends
        // can never both pass the gate.
        {
            let mut state = self.state.lock().unwrap();
            if *state == ControllerState::AwaitingReply {
                return false;
            }
            *state = ControllerState::AwaitingReply;
        }
        let _guard = InFlightGuard { state: &self.state };

        self.transcript
            .lock()
            .unwrap()
            .append(ChatMessage::user(&self.username, text));

        let chess_relevant = classify::is_chess_query(text);
        let outbound = prompt::build_prompt(text, moves, fen, chess_relevant);

        let reply = match self.gateway.request(&outbound).await {
            Ok(suggestion) => ChatMessage::ai_suggestion(&suggestion),
            Err(err) => {
                tracing::warn!("suggestion request failed: {err}");
                ChatMessage::ai_suggestion(FAILURE_REPLY)
            }
        };
        self.transcript.lock().unwrap().append(reply);
        true
    }

    /// True while a request is outstanding. The UI disables the text
    /// input whenever this returns true.
    pub fn is_awaiting_reply(&self) -> bool {
        *self.state.lock().unwrap() == ControllerState::AwaitingReply
    }

    /// Snapshot of the transcript, oldest-first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().unwrap().entries().to_vec()
    }
}
