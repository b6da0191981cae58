use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{ChatRequest, ConversationRequest, ErrorResponse};
use crate::service::chat_service::ChatService;

/// The only error text a client ever sees.
pub const GENERIC_ERROR: &str = "Failed to process request";

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/chat` — JSON in, `{ message }` or `{ error }` out.
///
/// Body rejections (bad JSON, wrong content type, unknown role) are folded
/// into the same 500 shape as backend failures.
pub async fn chat_handler(
    State(svc): State<ChatService>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(body)) => ConversationRequest::try_from(body),
        Err(rejection) => Err(AppError::invalid_request(rejection.body_text())),
    };

    let result = match request {
        Ok(request) => svc.respond(request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(&err),
    }
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    if err.is_invalid_request() {
        warn!("Rejected chat request: {err}");
    }
    let body = ErrorResponse { error: GENERIC_ERROR.to_string() };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
