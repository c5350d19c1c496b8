use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Model output that is not parseable JSON. `raw` is the text after fence stripping.
    #[error("Invalid JSON format from model response: {reason}")]
    Format { reason: String, raw: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),

    /// Any failure inside the profile update transaction; nothing was written.
    #[error("Failed to update profile: {0}")]
    ProfileUpdate(#[source] Box<AppError>),
}

impl AppError {
    /// Wraps a storage failure with a short description of the attempted operation.
    pub fn storage(err: anyhow::Error, action: &str) -> Self {
        AppError::Storage(err.context(action.to_string()))
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Format { .. } => (StatusCode::BAD_GATEWAY, "MODEL_FORMAT_ERROR"),
            AppError::Llm(_) => (StatusCode::BAD_GATEWAY, "LLM_ERROR"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::ProfileUpdate(inner) => inner.status_and_code(),
        }
    }

    /// Client-facing message. Server-side causes stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Format { .. } => "The AI model returned an unreadable response".to_string(),
            AppError::Llm(_) => "An AI processing error occurred".to_string(),
            AppError::Storage(_) => "A storage error occurred".to_string(),
            AppError::ProfileUpdate(inner) => {
                format!("Failed to update profile: {}", inner.public_message())
            }
        }
    }

    /// Records the server-side cause. Client errors are not logged.
    fn log_cause(&self) {
        match self {
            AppError::Format { raw, reason } => {
                tracing::error!("Unparseable model output ({reason}): {raw}")
            }
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::Storage(e) => tracing::error!("Storage error: {e:?}"),
            AppError::ProfileUpdate(inner) => inner.log_cause(),
            AppError::Unauthorized | AppError::NotFound(_) | AppError::Validation(_) => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        self.log_cause();
        let message = self.public_message();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
