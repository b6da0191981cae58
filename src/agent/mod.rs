pub mod availability;
pub mod model_map;

use async_trait::async_trait;
use rig::completion::{Chat, CompletionError, PromptError};
use rig::message::Message as RigMessage;
use rig::prelude::CompletionClient;
use rig::providers::openai;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::errors::AppError;
use crate::models::{Message, MessageRole};

use self::model_map::BackendModelId;

pub const SYSTEM_INSTRUCTION: &str = "You are an advanced AI assistant. \
                                      You are helpful, harmless, and honest. \
                                      You provide detailed, accurate, and thoughtful responses. \
                                      You can assist with coding, analysis, creative writing, \
                                      problem-solving, and much more.";

/// Generation-length cap sent with every live request.
pub const MAX_TOKENS: u64 = 4000;

/// Fragments of rig's `ResponseError` text for responses that carried no
/// choice or no message content.
const EMPTY_RESPONSE_MARKERS: &[&str] = &["no choices", "no message", "no content", "empty"];

/// A fully assembled live-backend call.
#[derive(Debug, Clone)]
pub struct LiveRequest {
    pub api_key: String,
    pub model: BackendModelId,
    /// Conversation with the system instruction already in front.
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u64,
}

/// Chat-completion backend.
///
/// Implementations return the first candidate's text, `EmptyCompletion`
/// when there is no usable text, and `InferenceFailed` for everything else.
#[async_trait]
pub trait LiveBackend: Send + Sync {
    async fn complete(&self, request: LiveRequest) -> Result<String, AppError>;
}

/// A conversation reshaped into rig's preamble / history / prompt form.
#[derive(Debug, PartialEq)]
struct TurnPlan<'a> {
    preamble: String,
    history: Vec<&'a Message>,
    prompt: &'a Message,
}

/// System entries become the preamble (in order), the final user or
/// assistant entry the prompt, and everything between is replayed as
/// history. A conversation with no user or assistant entry is sent with its
/// last system entry as the prompt.
fn plan_turn(messages: &[Message]) -> Option<TurnPlan<'_>> {
    let (mut system, mut turns): (Vec<&Message>, Vec<&Message>) =
        messages.iter().partition(|m| m.role == MessageRole::System);

    let prompt = match turns.pop() {
        Some(last) => last,
        None => system.pop()?,
    };
    let preamble = system
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(TurnPlan { preamble, history: turns, prompt })
}

fn to_rig(message: &Message) -> RigMessage {
    match message.role {
        MessageRole::Assistant => RigMessage::assistant(&message.content),
        MessageRole::User | MessageRole::System => RigMessage::user(&message.content),
    }
}

fn is_empty_response(err: &PromptError) -> bool {
    match err {
        PromptError::CompletionError(CompletionError::ResponseError(msg)) => {
            let msg = msg.to_lowercase();
            EMPTY_RESPONSE_MARKERS.iter().any(|marker| msg.contains(marker))
        }
        _ => false,
    }
}

/// Live backend backed by rig's OpenAI chat-completions client. A fresh
/// client and agent are built per request because the credential is resolved
/// per request.
#[derive(Clone, Default)]
pub struct OpenAiAgentService {
    base_url: Option<String>,
}

impl OpenAiAgentService {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    fn client(&self, api_key: &str) -> Result<openai::Client, AppError> {
        let builder = openai::Client::builder().api_key(api_key);
        let builder = match &self.base_url {
            Some(url) => builder.base_url(url),
            None => builder,
        };
        builder
            .build()
            .map_err(|e| AppError::inference(format!("Failed to build OpenAI client: {e}")))
    }
}

#[async_trait]
impl LiveBackend for OpenAiAgentService {
    async fn complete(&self, request: LiveRequest) -> Result<String, AppError> {
        let plan = plan_turn(&request.messages)
            .ok_or_else(|| AppError::inference("conversation has no messages"))?;
        let history: Vec<RigMessage> = plan.history.iter().map(|m| to_rig(m)).collect();
        let prompt = to_rig(plan.prompt);

        debug!(
            model = %request.model,
            history_len = history.len(),
            temperature = request.temperature,
            "sending live chat completion"
        );

        let agent = self
            .client(&request.api_key)?
            .completions_api()
            .agent(request.model.as_str())
            .preamble(&plan.preamble)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .additional_params(json!({ "max_tokens": request.max_tokens }))
            .build();

        let content = match agent.chat(prompt, history).await {
            Ok(content) => content,
            Err(e) if is_empty_response(&e) => {
                warn!("OpenAI returned no usable choice for model {}: {e}", request.model);
                return Err(AppError::EmptyCompletion);
            }
            Err(e) => {
                error!("OpenAI completion failed for model {}: {e}", request.model);
                return Err(AppError::inference(e.to_string()));
            }
        };

        if content.trim().is_empty() {
            return Err(AppError::EmptyCompletion);
        }
        Ok(content)
    }
}
