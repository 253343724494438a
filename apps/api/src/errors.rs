use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// `error` category reported for every upstream completion failure.
pub const UPSTREAM_ERROR_CATEGORY: &str = "OpenAI error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input problem. The message is returned to the caller verbatim.
    #[error("{0}")]
    Validation(String),

    /// Body rejected before reaching a handler (not JSON, wrong content type).
    #[error("{message}")]
    BadRequestBody { status: StatusCode, message: String },

    #[error("Upstream completion failed: {0}")]
    Upstream(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::BadRequestBody { status, message } => (*status, json!({ "error": message })),
            AppError::Upstream(e) => {
                tracing::error!(
                    status = ?e.status(),
                    data = ?e.data(),
                    "Upstream completion error: {e}"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, upstream_envelope(e))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequestBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// `{error, message, status?, data?}` with upstream details surfaced as-is.
fn upstream_envelope(err: &LlmError) -> Value {
    let mut body = Map::new();
    body.insert("error".into(), Value::from(UPSTREAM_ERROR_CATEGORY));
    body.insert("message".into(), Value::from(err.message()));
    if let Some(status) = err.status() {
        body.insert("status".into(), Value::from(status));
    }
    if let Some(data) = err.data() {
        body.insert("data".into(), data.clone());
    }
    Value::Object(body)
}
