//! Shared fixtures for router-level tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::rewrite::resolver::InstructionResolver;
use crate::routes::build_router;
use crate::state::AppState;

type FailureFactory = Box<dyn Fn() -> LlmError + Send + Sync>;

/// Completion double that records every request and replies with a fixed outcome.
pub struct RecordingCompletion {
    calls: Mutex<Vec<CompletionRequest>>,
    reply: Result<String, FailureFactory>,
}

impl RecordingCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Ok(text.to_string()),
        }
    }

    pub fn failing(make_error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Err(Box::new(make_error)),
        }
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionService for RecordingCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

/// Router over the production prompt tables and the given completion double.
pub fn test_router(llm: Arc<RecordingCompletion>) -> Router {
    build_router(AppState {
        llm,
        resolver: Arc::new(InstructionResolver::standard()),
    })
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, "application/json", &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
