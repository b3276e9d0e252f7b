use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every pipeline stage fails fast: the first error propagates unchanged to
/// the handler boundary, where this mapping turns it into an HTTP response.
/// No stage recovers and no partial result is ever returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("No JSON object found in model output")]
    NoJsonFound,

    #[error("Malformed JSON in model output: {detail}")]
    MalformedJson {
        detail: String,
        /// The substring we tried to parse, kept for debugging.
        snippet: String,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Caller faults map to 400; upstream faults (generation backend
        // misbehaving) map to 502. The original detail is always surfaced so
        // the caller can see what actually went wrong.
        let (status, code, message) = match &self {
            AppError::Fetch(msg) => (StatusCode::BAD_REQUEST, "FETCH_ERROR", msg.clone()),
            AppError::Extraction(msg) => {
                (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR", msg.clone())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(msg) => {
                tracing::error!("Generation backend error: {msg}");
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR", msg.clone())
            }
            AppError::NoJsonFound => (
                StatusCode::BAD_GATEWAY,
                "NO_JSON_FOUND",
                "No JSON object found in model output".to_string(),
            ),
            AppError::MalformedJson { detail, snippet } => {
                tracing::error!("Malformed JSON from model: {detail}; snippet: {snippet}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_JSON",
                    format!("Malformed JSON in model output: {detail}"),
                )
            }
        };

        let body = Json(json!({
            "status": "error",
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
