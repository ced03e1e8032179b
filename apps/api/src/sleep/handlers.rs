//! Axum route handler for the sleep endpoint.

use axum::Json;
use serde::Deserialize;

use crate::clock;
use crate::errors::AppError;
use crate::sleep::cycles::{compute_sleep_plan, SleepPlanResult};

#[derive(Debug, Deserialize)]
pub struct SleepRequest {
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
}

fn default_wake_time() -> String {
    "07:00".to_string()
}

/// POST /api/sleep/optimize
///
/// Optimal bedtimes, sleep inertia window, and cycle visualization for a
/// wake time. Time parsing is the only failure mode; the calculator itself
/// never fails.
pub async fn handle_optimize_sleep(
    Json(request): Json<SleepRequest>,
) -> Result<Json<SleepPlanResult>, AppError> {
    let wake_time = clock::parse_hhmm(&request.wake_time).ok_or_else(|| {
        AppError::Validation(format!(
            "wake_time must be HH:MM, got '{}'",
            request.wake_time
        ))
    })?;

    Ok(Json(compute_sleep_plan(wake_time)))
}
