use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Matches the backend `MessageRole` (lowercase on the wire).
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
        }
    }
}

/// Matches the backend `Message` model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into(), timestamp: Utc::now() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into(), timestamp: Utc::now() }
    }
}

/// Canonical model ids offered in the settings panel, with display labels.
pub const MODEL_OPTIONS: &[(&str, &str)] = &[
    ("gpt-4o", "GPT-4o"),
    ("gpt-4-turbo", "GPT-4 Turbo"),
    ("claude-3.5-sonnet", "Claude 3.5 Sonnet"),
    ("gpt-3.5-turbo", "GPT-3.5 Turbo"),
];

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Model and temperature picked in the settings panel.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self { model: DEFAULT_MODEL.to_string(), temperature: DEFAULT_TEMPERATURE }
    }
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub temperature: f64,
}

/// Success body of `POST /chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}
