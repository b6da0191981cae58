//! Client-side conversation log and the single-request gate in front of it.
//!
//! Kept free of Leptos so it can be unit tested natively; `state.rs` wraps a
//! [`ChatSession`] in a signal.

use crate::models::{ChatRequest, GenerationSettings, Message};

pub const GREETING: &str = "👋 Hello! I'm your AI assistant. I can help with coding, analysis, \
                            creative writing, problem-solving, and much more. \
                            What can I help you with today?";
pub const CLEARED: &str = "Chat cleared. How can I help you?";
pub const ERROR_APOLOGY: &str = "I apologize, but I encountered an error. Please try again.";

/// Ordered, append-only message log. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn seeded(greeting: &str) -> Self {
        Self { messages: vec![Message::assistant(greeting)] }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replaces the whole log with a single assistant message.
    pub fn reset(&mut self) {
        self.messages = vec![Message::assistant(CLEARED)];
    }

    pub fn current(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::seeded(GREETING)
    }
}

/// A conversation plus the busy gate: at most one request in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    store: ConversationStore,
    busy: bool,
}

impl ChatSession {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    /// Starts a request cycle. Returns `None`, leaving the session untouched,
    /// when the input is blank or a request is already pending.
    pub fn begin_turn(&mut self, text: &str, settings: &GenerationSettings) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() || self.busy {
            return None;
        }

        self.store.append(Message::user(text));
        self.busy = true;

        Some(ChatRequest {
            messages: self.store.current(),
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }

    /// Ends the pending cycle. The outcome is always appended, even if the
    /// conversation was reset meanwhile.
    pub fn complete_turn(&mut self, outcome: Result<String, String>) {
        let reply = match outcome {
            Ok(text) => Message::assistant(text),
            Err(e) => {
                log::error!("Chat request failed: {e}");
                Message::assistant(ERROR_APOLOGY)
            }
        };
        self.store.append(reply);
        self.busy = false;
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }
}
