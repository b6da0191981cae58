use gloo_net::http::Request;

use crate::models::{ChatRequest, ChatResponse};

/// Base URL of the backend API server.
const API_BASE: &str = "http://localhost:3000";

/// Sends the conversation snapshot to `POST /chat` and returns the reply text.
/// Any non-OK status is an error; the server's `{ error }` body carries no
/// detail worth surfacing.
pub async fn send_chat(request: &ChatRequest) -> Result<String, String> {
    let resp = Request::post(&format!("{API_BASE}/chat"))
        .json(request)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json::<ChatResponse>()
        .await
        .map(|body| body.message)
        .map_err(|e| format!("Parse error: {e}"))
}
