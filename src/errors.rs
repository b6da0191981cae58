use thiserror::Error;

/// Top-level application error.
///
/// Only `InvalidRequest` and `BackendUnavailable` ever leave
/// [`ChatService::respond`](crate::service::chat_service::ChatService::respond);
/// the other variants are produced by the live backend adapter and
/// normalized (or recovered) inside the service.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Caller errors ────────────────────────────────────────────────────────
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    // ── Live backend errors ──────────────────────────────────────────────────
    #[error("Live backend unavailable")]
    BackendUnavailable,

    #[error("Inference failed: {message}")]
    InferenceFailed { message: String },

    #[error("Live backend returned no usable text")]
    EmptyCompletion,
}

impl AppError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        AppError::InvalidRequest { reason: reason.into() }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        AppError::InferenceFailed { message: message.into() }
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, AppError::InvalidRequest { .. })
    }

    #[cfg(test)]
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, AppError::BackendUnavailable)
    }
}
