//! Axum route handler for the Rewrite API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::rewrite::{rewrite, RewriteRequest, RewriteResponse};
use crate::state::AppState;

/// POST /api/rewrite
///
/// Rewrites survey free text with the instruction template selected by `mode`.
/// 400 on blank text or unsupported mode, 500 with upstream details when the
/// completion call fails.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    payload: Result<Json<RewriteRequest>, JsonRejection>,
) -> Result<Json<RewriteResponse>, AppError> {
    let Json(request) = payload?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        mode = request.mode.as_ref().map_or("", |m| m.as_str()),
        phase = request.phase.as_deref().unwrap_or_default(),
        text_len = request.text.as_deref().map_or(0, |t| t.chars().count()),
        "Rewrite request received"
    );

    let result = rewrite(&state.resolver, state.llm.as_ref(), request)
        .instrument(info_span!("rewrite", %request_id))
        .await;

    match &result {
        Ok(response) => info!(%request_id, output_len = response.text.len(), "Rewrite completed"),
        Err(AppError::Validation(msg)) => info!(%request_id, "Rewrite request rejected: {msg}"),
        Err(_) => {}
    }

    result.map(Json)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::llm_client::{LlmError, MAX_OUTPUT_TOKENS, MODEL};
    use crate::prompts::{dashboard, kickoff};
    use crate::test_helpers::{post_json, post_raw, test_router, RecordingCompletion};

    #[tokio::test]
    async fn test_dashboard_delivery_scenario() {
        let llm = Arc::new(RecordingCompletion::replying("Onboarding is live."));
        let app = test_router(llm.clone());

        let (status, body) = post_json(
            app,
            "/api/rewrite",
            json!({ "text": "We finished the onboarding flow.", "mode": "dashboard_delivery" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "text": "Onboarding is live." }));

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].instructions, dashboard::DASHBOARD_DELIVERY);
        assert_eq!(calls[0].input, "Original text:\nWe finished the onboarding flow.");
        assert_eq!(calls[0].model, MODEL);
        assert_eq!(calls[0].max_output_tokens, MAX_OUTPUT_TOKENS);
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_without_upstream_call() {
        let llm = Arc::new(RecordingCompletion::replying("unused"));
        let (status, body) = post_json(
            test_router(llm.clone()),
            "/api/rewrite",
            json!({ "text": "", "mode": "kickoff_internal" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing \"text\" in request body." }));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_whitespace_and_non_string_text_are_rejected() {
        let llm = Arc::new(RecordingCompletion::replying("unused"));
        for body in [
            json!({ "mode": "kickoff_internal" }),
            json!({ "text": "   \n\t ", "mode": "kickoff_internal" }),
            json!({ "text": 17, "mode": "kickoff_internal" }),
            json!({ "text": null, "mode": "kickoff_internal" }),
        ] {
            let (status, response) = post_json(test_router(llm.clone()), "/api/rewrite", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], "Missing \"text\" in request body.");
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_mode_is_named_in_error() {
        let llm = Arc::new(RecordingCompletion::replying("unused"));
        let (status, body) = post_json(
            test_router(llm.clone()),
            "/api/rewrite",
            json!({ "text": "ok", "mode": "not_a_real_mode" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Unsupported mode: not_a_real_mode" }));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_string_mode_is_named_in_error() {
        let llm = Arc::new(RecordingCompletion::replying("unused"));
        let (status, body) =
            post_json(test_router(llm.clone()), "/api/rewrite", json!({ "text": "ok", "mode": 5 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Unsupported mode: 5" }));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_text_is_validated_before_mode() {
        let llm = Arc::new(RecordingCompletion::replying("unused"));
        let (status, body) = post_json(
            test_router(llm.clone()),
            "/api/rewrite",
            json!({ "text": " ", "mode": "not_a_real_mode" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing \"text\" in request body.");
    }

    #[tokio::test]
    async fn test_project_context_adds_second_block() {
        let llm = Arc::new(RecordingCompletion::replying("done"));
        let (status, _) = post_json(
            test_router(llm.clone()),
            "/api/rewrite",
            json!({
                "text": "Scope agreed.",
                "mode": "kickoff_client",
                "phase": "kickoff",
                "projectContext": "Banking client, mobile app rebuild."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let calls = llm.calls();
        assert_eq!(calls[0].instructions, kickoff::KICKOFF_CLIENT);

        let (first, second) = calls[0].input.split_once("\n\n").unwrap();
        assert_eq!(first, "Original text:\nScope agreed.");
        assert!(second.starts_with("Additional context"));
        assert!(second.ends_with("Banking client, mobile app rebuild."));
        assert!(!second.contains("\n\n"));
    }

    #[tokio::test]
    async fn test_blank_project_context_adds_nothing() {
        let llm = Arc::new(RecordingCompletion::replying("done"));
        post_json(
            test_router(llm.clone()),
            "/api/rewrite",
            json!({ "text": "Scope agreed.", "mode": "kickoff_client", "projectContext": "   " }),
        )
        .await;

        let calls = llm.calls();
        assert_eq!(calls[0].input, "Original text:\nScope agreed.");
        assert!(!calls[0].input.contains("Additional context"));
    }

    #[tokio::test]
    async fn test_empty_output_is_a_valid_success() {
        let llm = Arc::new(RecordingCompletion::replying(""));
        let (status, body) = post_json(
            test_router(llm),
            "/api/rewrite",
            json!({ "text": "hello", "mode": "final_summary" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "text": "" }));
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500_envelope() {
        let llm = Arc::new(RecordingCompletion::failing(|| LlmError::Api {
            status: 401,
            message: "Incorrect API key provided.".to_string(),
            data: Some(json!({ "error": { "code": "invalid_api_key" } })),
        }));
        let (status, body) = post_json(
            test_router(llm.clone()),
            "/api/rewrite",
            json!({ "text": "hello", "mode": "midterm_internal" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "error": "OpenAI error",
                "message": "Incorrect API key provided.",
                "status": 401,
                "data": { "error": { "code": "invalid_api_key" } }
            })
        );
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_identical_requests_call_upstream_each_time() {
        let llm = Arc::new(RecordingCompletion::replying("same"));
        let body = json!({ "text": "Weekly update", "mode": "internal", "phase": "midterm" });

        for _ in 0..2 {
            let (status, _) = post_json(test_router(llm.clone()), "/api/rewrite", body.clone()).await;
            assert_eq!(status, StatusCode::OK);
        }

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected_before_handler() {
        let llm = Arc::new(RecordingCompletion::replying("unused"));
        let (status, body) = post_raw(
            test_router(llm.clone()),
            "/api/rewrite",
            "application/json",
            "{not json",
        )
        .await;

        assert!(status.is_client_error());
        assert!(body["error"].is_string());
        assert_eq!(llm.call_count(), 0);
    }
}
