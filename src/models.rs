use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a conversation. The client stamps `timestamp`; bodies that
/// omit it are stamped on arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), timestamp: Utc::now() }
    }

    #[cfg(test)]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    #[cfg(test)]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }
}

/// Canonical, user-facing model identifier.
///
/// Ids outside the enumerated set are carried verbatim in `Other` so they
/// can still be displayed; the mapper sends them to the default backend
/// model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    Gpt4o,
    Gpt4Turbo,
    Claude35Sonnet,
    Gpt35Turbo,
    Other(String),
}

impl ModelId {
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::Gpt4o => "gpt-4o",
            ModelId::Gpt4Turbo => "gpt-4-turbo",
            ModelId::Claude35Sonnet => "claude-3.5-sonnet",
            ModelId::Gpt35Turbo => "gpt-3.5-turbo",
            ModelId::Other(id) => id,
        }
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        match s.as_str() {
            "gpt-4o" => ModelId::Gpt4o,
            "gpt-4-turbo" => ModelId::Gpt4Turbo,
            "claude-3.5-sonnet" => ModelId::Claude35Sonnet,
            "gpt-3.5-turbo" => ModelId::Gpt35Turbo,
            _ => ModelId::Other(s),
        }
    }
}

#[cfg(test)]
impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::from(s.to_string())
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        match id {
            ModelId::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    pub model: ModelId,
    /// `None` means "let the service pick its default".
    pub temperature: Option<f64>,
}

/// A validated snapshot of the conversation plus generation parameters.
#[derive(Debug, Clone)]
pub struct ConversationRequest {
    pub messages: Vec<Message>,
    pub params: GenerationParameters,
}

/// `POST /chat` request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: ModelId,
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl TryFrom<ChatRequest> for ConversationRequest {
    type Error = AppError;

    fn try_from(req: ChatRequest) -> Result<Self, Self::Error> {
        if let Some(t) = req.temperature {
            if !t.is_finite() || !(0.0..=1.0).contains(&t) {
                return Err(AppError::invalid_request(format!(
                    "temperature {t} is outside [0, 1]"
                )));
            }
        }
        Ok(ConversationRequest {
            messages: req.messages,
            params: GenerationParameters { model: req.model, temperature: req.temperature },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_id_parses_known_and_unknown() {
        assert_eq!(ModelId::from("claude-3.5-sonnet"), ModelId::Claude35Sonnet);
        assert_eq!(ModelId::from("llama-3"), ModelId::Other("llama-3".to_string()));
        assert_eq!(ModelId::from("llama-3").as_str(), "llama-3");
    }

    #[test]
    fn request_body_accepts_messages_without_timestamps() {
        let body = r#"{
            "messages": [{"role": "user", "content": "hi"}],
            "model": "gpt-4o",
            "temperature": 0.3
        }"#;
        let req: ChatRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, MessageRole::User);
        assert_eq!(req.model, ModelId::Gpt4o);

        let conv = ConversationRequest::try_from(req).unwrap();
        assert_eq!(conv.params.temperature, Some(0.3));
    }

    #[test]
    fn request_body_rejects_unknown_role() {
        let body = r#"{"messages": [{"role": "robot", "content": "hi"}], "model": "gpt-4o"}"#;
        assert!(serde_json::from_str::<ChatRequest>(body).is_err());
    }

    #[test]
    fn temperature_out_of_range_is_invalid() {
        let req = ChatRequest {
            messages: vec![Message::user("hi")],
            model: ModelId::Gpt4o,
            temperature: Some(1.5),
        };
        let err = ConversationRequest::try_from(req).unwrap_err();
        assert!(err.is_invalid_request());
    }
}
