//! LLM Client: the single point of entry for all completion calls in Metric Mate.
//!
//! ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
//! Handlers depend on the `CompletionService` trait; `OpenAiClient` is the only
//! production implementation.
//!
//! Model: gpt-4.1-mini (hardcoded; do not make configurable)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The model used for all rewrite calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4.1-mini";
/// Output cap applied to every rewrite call.
pub const MAX_OUTPUT_TOKENS: u32 = 700;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Parsed JSON error body, or the raw body text when it was not JSON.
        data: Option<Value>,
    },

    #[error("Malformed completion response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LlmError {
    /// Upstream message, without the variant prefix for API errors.
    pub fn message(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status reported by the upstream, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Structured error payload returned by the upstream, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            LlmError::Api { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            LlmError::Timeout(timeout)
        } else {
            LlmError::Http(err)
        }
    }
}

/// One completion call. Serialized as-is for the Responses API body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub instructions: String,
    pub input: String,
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    /// Builds a request with the fixed model and output cap.
    pub fn new(instructions: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: MODEL.to_string(),
            instructions: instructions.into(),
            input: input.into(),
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// Text-in/text-out completion backend.
///
/// Carried in `AppState` as `Arc<dyn CompletionService>` so tests can swap in a
/// recording double without touching handler code.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Makes exactly one upstream call. Returns the output text, which may be empty.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Deserialize)]
struct ResponsesApiResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl ResponsesApiResponse {
    /// The aggregated output text. Prefers the top-level `output_text` field and
    /// falls back to concatenating every `output_text` part of `message` items.
    fn output_text(&self) -> String {
        if let Some(text) = &self.output_text {
            return text.clone();
        }
        self.output
            .iter()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.content_type == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

/// Client for the OpenAI Responses API.
/// No retries: a failed call surfaces to the caller on the same request.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_key,
            endpoint: responses_endpoint(base_url),
            timeout,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::from_transport(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::from_transport(e, self.timeout))?;

        if !status.is_success() {
            return Err(api_error(status, body));
        }

        let parsed: ResponsesApiResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Completion succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(parsed.output_text())
    }
}

fn responses_endpoint(base_url: &str) -> String {
    format!("{}/responses", base_url.trim_end_matches('/'))
}

/// Builds an `LlmError::Api` from a non-2xx response, keeping the body intact.
fn api_error(status: StatusCode, body: String) -> LlmError {
    let parsed = serde_json::from_str::<Value>(&body).ok();

    let message = parsed
        .as_ref()
        .and_then(|v| v.pointer("/error/message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body.clone()
            }
        });

    let data = match parsed {
        Some(value) => Some(value),
        None if body.trim().is_empty() => None,
        None => Some(Value::String(body)),
    };

    LlmError::Api {
        status: status.as_u16(),
        message,
        data,
    }
}
