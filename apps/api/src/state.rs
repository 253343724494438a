use std::sync::Arc;

use crate::llm_client::CompletionService;
use crate::rewrite::resolver::InstructionResolver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: OpenAiClient.
    pub llm: Arc<dyn CompletionService>,
    /// Prompt tables in precedence order, built once at startup.
    pub resolver: Arc<InstructionResolver>,
}
