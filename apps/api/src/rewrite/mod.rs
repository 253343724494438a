// Rewrite Endpoint: validate → resolve → compose input → one completion call.
// All upstream calls go through llm_client::CompletionService. No caching:
// identical requests produce independent upstream calls.

pub mod handlers;
pub mod resolver;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, CompletionService};
use crate::prompts::Mode;
use resolver::InstructionResolver;

pub const MISSING_TEXT_ERROR: &str = "Missing \"text\" in request body.";

/// Label that opens every composed input.
pub const ORIGINAL_TEXT_LABEL: &str = "Original text:";

/// Label for the optional project-context block.
pub const CONTEXT_LABEL: &str =
    "Additional context (use this for nuance and tone; do not repeat it verbatim):";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /api/rewrite`.
///
/// Every field is optional at the type level. A non-string JSON value is
/// treated the same as a missing field so type errors surface as the normal
/// validation responses instead of extractor rejections. `mode` is the
/// exception: a non-null, non-string value keeps its JSON text so the
/// unsupported-mode error can name it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "mode_or_none")]
    pub mode: Option<Mode>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub phase: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub project_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewriteResponse {
    pub text: String,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn mode_or_none<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(Mode::parse(&s)),
        other => Some(Mode::Unknown(other.to_string())),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one rewrite. Validation failures return before any upstream call.
pub async fn rewrite(
    resolver: &InstructionResolver,
    llm: &dyn CompletionService,
    request: RewriteRequest,
) -> Result<RewriteResponse, AppError> {
    let text = request
        .text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_TEXT_ERROR.to_string()))?;

    let mode = request.mode.unwrap_or_else(|| Mode::parse(""));
    let resolved = resolver
        .resolve(&mode, request.phase.as_deref())
        .ok_or_else(|| AppError::Validation(format!("Unsupported mode: {mode}")))?;

    tracing::debug!(table = %resolved.phase, "Resolved instructions for mode {mode}");

    let input = compose_input(text, request.project_context.as_deref());
    let completion = CompletionRequest::new(resolved.instructions, input);

    let text = llm.complete(&completion).await?;
    Ok(RewriteResponse { text })
}

/// `Original text:\n<text>`, plus a context block separated by one blank line
/// when `project_context` is non-blank. `text` is passed through untouched;
/// the context is trimmed.
pub fn compose_input(text: &str, project_context: Option<&str>) -> String {
    let mut input = format!("{ORIGINAL_TEXT_LABEL}\n{text}");

    if let Some(context) = project_context.map(str::trim).filter(|c| !c.is_empty()) {
        input.push_str("\n\n");
        input.push_str(CONTEXT_LABEL);
        input.push('\n');
        input.push_str(context);
    }

    input
}
