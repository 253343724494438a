pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::rewrite::handlers as rewrite;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/rewrite", post(rewrite::handle_rewrite))
        .route("/api/dashboard/normalize", post(dashboard::handle_normalize))
        .with_state(state)
}
