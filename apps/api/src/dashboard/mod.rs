//! Dashboard payload normalization.
//!
//! Survey pages hand the dashboard either the current nested shape
//! (`project` / `final` / `finalSummary`) or the older flat shape. Both are
//! normalized here to `DashboardPayload` by field-name mapping; every legacy
//! field lands in exactly one current field and unrecognized keys ride along.

pub mod handlers;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Keys whose presence marks a payload as the current shape.
const CURRENT_SHAPE_KEYS: [&str; 3] = ["project", "final", "finalSummary"];

// ────────────────────────────────────────────────────────────────────────────
// Current shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answers from the final survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_on_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_satisfaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_learned: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canonical dashboard payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: ProjectInfo,
    /// Kickoff survey answers, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kickoff: Option<Value>,
    /// Midterm survey answers, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midterm: Option<Value>,
    #[serde(default, rename = "final", deserialize_with = "null_as_default")]
    pub final_review: FinalReview,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_summary: Option<String>,
    /// Keys neither shape defines.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` sections read the same as missing ones.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Legacy flat shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPayload {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub project_manager: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub delivered_on_time: Option<String>,
    #[serde(default)]
    pub budget_status: Option<String>,
    #[serde(default)]
    pub client_satisfaction: Option<String>,
    #[serde(default)]
    pub wins: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub lessons_learned: Option<String>,
    #[serde(default)]
    pub next_steps: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<LegacyPayload> for DashboardPayload {
    fn from(legacy: LegacyPayload) -> Self {
        DashboardPayload {
            project: ProjectInfo {
                name: legacy.project_name,
                client: legacy.client_name,
                manager: legacy.project_manager,
                start_date: legacy.start_date,
                end_date: legacy.end_date,
                extra: Map::new(),
            },
            kickoff: None,
            midterm: None,
            final_review: FinalReview {
                delivered_on_time: legacy.delivered_on_time,
                budget_status: legacy.budget_status,
                client_satisfaction: legacy.client_satisfaction,
                wins: legacy.wins,
                challenges: legacy.challenges,
                lessons_learned: legacy.lessons_learned,
                next_steps: legacy.next_steps,
                extra: Map::new(),
            },
            final_summary: legacy.summary,
            extra: legacy.extra,
        }
    }
}

/// Which shape a raw payload was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Current,
    Legacy,
}

pub fn detect_shape(object: &Map<String, Value>) -> PayloadShape {
    if CURRENT_SHAPE_KEYS.iter().any(|key| object.contains_key(*key)) {
        PayloadShape::Current
    } else {
        PayloadShape::Legacy
    }
}

/// Normalizes either payload shape into `DashboardPayload`.
pub fn normalize(payload: Value) -> Result<DashboardPayload, AppError> {
    let Value::Object(object) = payload else {
        return Err(AppError::Validation(
            "Dashboard payload must be a JSON object.".to_string(),
        ));
    };

    let shape = detect_shape(&object);
    let invalid = |e: serde_json::Error| {
        AppError::Validation(format!("Invalid dashboard payload: {e}"))
    };

    match shape {
        PayloadShape::Current => serde_json::from_value(Value::Object(object)).map_err(invalid),
        PayloadShape::Legacy => serde_json::from_value::<LegacyPayload>(Value::Object(object))
            .map(DashboardPayload::from)
            .map_err(invalid),
    }
}
