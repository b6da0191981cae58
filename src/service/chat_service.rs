use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::agent::availability::{select_backend, BackendAvailability, BackendChoice};
use crate::agent::model_map::resolve_backend_model;
use crate::agent::{LiveBackend, LiveRequest, MAX_TOKENS, SYSTEM_INSTRUCTION};
use crate::errors::AppError;
use crate::fallback;
use crate::models::{ChatResponse, ConversationRequest, Message};

const DEFAULT_TEMPERATURE: f64 = 0.7;
pub(crate) const EMPTY_COMPLETION_APOLOGY: &str = "I apologize, but I couldn't generate a response.";

/// Turns one conversation snapshot into one assistant reply, either from the
/// live backend or from the offline fallback.
#[derive(Clone)]
pub struct ChatService {
    availability: Arc<dyn BackendAvailability>,
    live: Arc<dyn LiveBackend>,
    fallback_delay: Duration,
}

impl ChatService {
    pub fn new(
        availability: Arc<dyn BackendAvailability>,
        live: Arc<dyn LiveBackend>,
        fallback_delay: Duration,
    ) -> Self {
        Self { availability, live, fallback_delay }
    }

    pub async fn respond(&self, request: ConversationRequest) -> Result<ChatResponse, AppError> {
        let request_id = Uuid::new_v4();

        // ── Validation ────────────────────────────────────────────────────────
        if request.messages.is_empty() {
            warn!(%request_id, "rejecting chat request with no messages");
            return Err(AppError::invalid_request("messages must not be empty"));
        }

        // ── Dispatch ──────────────────────────────────────────────────────────
        match select_backend(self.availability.as_ref()) {
            BackendChoice::Fallback => {
                info!(%request_id, model = %request.params.model, "answering from fallback");
                Ok(self.respond_offline(&request).await)
            }
            BackendChoice::Live { api_key } => {
                info!(%request_id, model = %request.params.model, "answering from live backend");
                self.respond_live(request_id, request, api_key).await
            }
        }
    }

    async fn respond_offline(&self, request: &ConversationRequest) -> ChatResponse {
        let last_text = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        debug!(topic = ?fallback::classify(last_text), "synthesizing fallback reply");
        let message = fallback::synthesize(last_text, &request.params.model);

        if !self.fallback_delay.is_zero() {
            tokio::time::sleep(self.fallback_delay).await;
        }
        ChatResponse { message }
    }

    async fn respond_live(
        &self,
        request_id: Uuid,
        request: ConversationRequest,
        api_key: String,
    ) -> Result<ChatResponse, AppError> {
        let temperature = request
            .params
            .temperature
            .filter(|t| *t != 0.0)
            .unwrap_or(DEFAULT_TEMPERATURE);

        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(Message::system(SYSTEM_INSTRUCTION));
        messages.extend(request.messages);

        let live_request = LiveRequest {
            api_key,
            model: resolve_backend_model(&request.params.model),
            messages,
            temperature,
            max_tokens: MAX_TOKENS,
        };

        match self.live.complete(live_request).await {
            Ok(message) => Ok(ChatResponse { message }),
            Err(AppError::EmptyCompletion) => {
                warn!(%request_id, "live backend returned no text, substituting apology");
                Ok(ChatResponse { message: EMPTY_COMPLETION_APOLOGY.to_string() })
            }
            Err(e) => {
                error!(%request_id, "live backend call failed: {e}");
                Err(AppError::BackendUnavailable)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::agent::availability::{StaticCredential, PLACEHOLDER_CREDENTIAL};
    use crate::models::{GenerationParameters, MessageRole, ModelId};

    /// Records every request and answers with a canned outcome.
    pub(crate) struct ScriptedBackend {
        outcome: fn() -> Result<String, AppError>,
        pub(crate) seen: Mutex<Vec<LiveRequest>>,
    }

    impl ScriptedBackend {
        pub(crate) fn new(outcome: fn() -> Result<String, AppError>) -> Arc<Self> {
            Arc::new(Self { outcome, seen: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl LiveBackend for ScriptedBackend {
        async fn complete(&self, request: LiveRequest) -> Result<String, AppError> {
            self.seen.lock().unwrap().push(request);
            (self.outcome)()
        }
    }

    fn offline_service() -> ChatService {
        ChatService::new(
            Arc::new(StaticCredential::none()),
            ScriptedBackend::new(|| Ok("unused".to_string())),
            Duration::ZERO,
        )
    }

    fn live_service(backend: Arc<ScriptedBackend>) -> ChatService {
        ChatService::new(Arc::new(StaticCredential::live("sk-test")), backend, Duration::ZERO)
    }

    fn request(messages: Vec<Message>, model: &str, temperature: Option<f64>) -> ConversationRequest {
        ConversationRequest {
            messages,
            params: GenerationParameters { model: ModelId::from(model), temperature },
        }
    }

    #[tokio::test]
    async fn empty_messages_is_invalid_request() {
        let err = offline_service()
            .respond(request(vec![], "gpt-4o", Some(0.7)))
            .await
            .unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[tokio::test]
    async fn fallback_answers_function_question_with_code_template() {
        let reply = offline_service()
            .respond(request(
                vec![
                    Message::assistant("Hello! How can I help?"),
                    Message::user("Can you help me write a function?"),
                ],
                "gpt-4o",
                Some(0.7),
            ))
            .await
            .unwrap();
        assert!(reply.message.contains("```"));
        assert!(reply.message.contains("Error handling"));
        assert!(!reply.message.contains("GPT-4O"));
    }

    #[tokio::test]
    async fn fallback_uses_unmapped_model_id() {
        let reply = offline_service()
            .respond(request(vec![Message::user("hi")], "claude-3.5-sonnet", None))
            .await
            .unwrap();
        assert!(reply.message.contains("CLAUDE-3.5-SONNET"));
    }

    #[tokio::test]
    async fn placeholder_credential_never_reaches_live_backend() {
        let backend = ScriptedBackend::new(|| Ok("live".to_string()));
        let svc = ChatService::new(
            Arc::new(StaticCredential::live(PLACEHOLDER_CREDENTIAL)),
            backend.clone(),
            Duration::ZERO,
        );
        let reply = svc.respond(request(vec![Message::user("hi")], "gpt-4o", None)).await.unwrap();
        assert_ne!(reply.message, "live");
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_waits_out_configured_delay() {
        let svc = ChatService::new(
            Arc::new(StaticCredential::none()),
            ScriptedBackend::new(|| Ok("unused".to_string())),
            Duration::from_millis(1000),
        );
        let started = tokio::time::Instant::now();
        svc.respond(request(vec![Message::user("hi")], "gpt-4o", None)).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn live_request_is_assembled_from_snapshot() {
        let backend = ScriptedBackend::new(|| Ok("Live answer".to_string()));
        let svc = live_service(backend.clone());
        let reply = svc
            .respond(request(
                vec![Message::assistant("Hi!"), Message::user("Explain lifetimes")],
                "gpt-4-turbo",
                Some(0.2),
            ))
            .await
            .unwrap();
        assert_eq!(reply.message, "Live answer");

        let seen = backend.seen.lock().unwrap();
        let sent = &seen[0];
        assert_eq!(sent.api_key, "sk-test");
        assert_eq!(sent.model.as_str(), "gpt-4-turbo-preview");
        assert_eq!(sent.temperature, 0.2);
        assert_eq!(sent.max_tokens, MAX_TOKENS);
        assert_eq!(sent.messages.len(), 3);
        assert_eq!(sent.messages[0].role, MessageRole::System);
        assert_eq!(sent.messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(sent.messages[2].content, "Explain lifetimes");
    }

    #[tokio::test]
    async fn live_temperature_defaults_when_unset_or_zero() {
        for temperature in [None, Some(0.0)] {
            let backend = ScriptedBackend::new(|| Ok("ok".to_string()));
            live_service(backend.clone())
                .respond(request(vec![Message::user("hi")], "unknown-model", temperature))
                .await
                .unwrap();
            let seen = backend.seen.lock().unwrap();
            assert_eq!(seen[0].temperature, DEFAULT_TEMPERATURE);
            assert_eq!(seen[0].model.as_str(), "gpt-4o");
        }
    }

    #[tokio::test]
    async fn empty_completion_is_replaced_by_apology() {
        let backend = ScriptedBackend::new(|| Err(AppError::EmptyCompletion));
        let reply = live_service(backend)
            .respond(request(vec![Message::user("hi")], "gpt-4o", None))
            .await
            .unwrap();
        assert_eq!(reply.message, EMPTY_COMPLETION_APOLOGY);
    }

    #[tokio::test]
    async fn network_error_becomes_backend_unavailable_without_detail() {
        let backend =
            ScriptedBackend::new(|| Err(AppError::inference("connection reset by peer (10.0.0.7:443)")));
        let err = live_service(backend)
            .respond(request(vec![Message::user("hi")], "gpt-4o", None))
            .await
            .unwrap_err();
        assert!(err.is_backend_unavailable());
        assert!(!err.to_string().contains("10.0.0.7"));
    }

    #[tokio::test]
    async fn sequential_turns_see_previous_reply() {
        let svc = offline_service();
        let mut conversation = vec![Message::assistant("Hello!")];

        conversation.push(Message::user("Tell me a story"));
        let first = svc
            .respond(request(conversation.clone(), "gpt-4o", None))
            .await
            .unwrap();
        conversation.push(Message::assistant(first.message.clone()));

        conversation.push(Message::user("Now analyze the data"));
        let snapshot = conversation.clone();
        svc.respond(request(snapshot.clone(), "gpt-4o", None)).await.unwrap();

        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[2].content, first.message);
    }
}
