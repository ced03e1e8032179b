//! Axum route handlers for the AI coach.

use axum::{extract::State, Json};
use serde_json::json;
use tracing::warn;

use crate::coach::models::{CoachRequest, DailyPlan};
use crate::db::{self, Collection};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/coach/analyze
///
/// Runs the planner (AI with deterministic fallback) over the user's current
/// state and persists the result best-effort: a failed insert is logged, the
/// response is returned regardless.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<CoachRequest>,
) -> Result<Json<DailyPlan>, AppError> {
    let plan = state.planner.plan(&request).await?;

    let document = json!({
        "input": &request,
        "recommendations": &plan,
    });
    if let Err(e) = db::insert_document(&state.db, Collection::Schedules, &document).await {
        warn!("failed to persist schedule: {e}");
    }

    Ok(Json(plan))
}

/// GET /api/coach/mock
///
/// Runs the planner on a baked-in demo input.
pub async fn handle_mock_schedule(
    State(state): State<AppState>,
) -> Result<Json<DailyPlan>, AppError> {
    let demo_input = CoachRequest {
        bedtime: "23:30".to_string(),
        wake_time: "07:00".to_string(),
        sleep_quality: 6,
        last_meal: "pasta with vegetables".to_string(),
        last_meal_time: "13:00".to_string(),
        energy_level: 5,
        mood: "tired".to_string(),
        workout_type: Some("strength training".to_string()),
        workout_time: Some("16:00".to_string()),
    };
    let plan = state.planner.plan(&demo_input).await?;
    Ok(Json(plan))
}
