use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;
use tracing::debug;

use crate::dashboard::{normalize, DashboardPayload};
use crate::errors::AppError;

/// POST /api/dashboard/normalize
///
/// Accepts either dashboard payload shape and returns the current one.
pub async fn handle_normalize(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DashboardPayload>, AppError> {
    let Json(raw) = payload?;
    let normalized = normalize(raw)?;
    debug!(
        "Normalized dashboard payload for project {:?}",
        normalized.project.name
    );
    Ok(Json(normalized))
}
