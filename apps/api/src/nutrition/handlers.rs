//! Axum route handlers for the nutrition endpoints.

use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::clock;
use crate::errors::AppError;
use crate::nutrition::glucose::{
    compute_curve, GlucoseCurveResult, MealType, DEFAULT_DURATION_HOURS, DEFAULT_SAMPLE_COUNT,
};
use crate::nutrition::timing::{compute_nutrient_timing, NutrientTimingResult};

#[derive(Debug, Deserialize)]
pub struct GlucoseRequest {
    /// Unrecognized names deserialize to `balanced` — silent default, not 400.
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default = "default_duration_hours")]
    pub duration_hours: f64,
}

fn default_duration_hours() -> f64 {
    DEFAULT_DURATION_HOURS
}

#[derive(Debug, Deserialize)]
pub struct NutrientTimingRequest {
    #[serde(default = "default_workout_time")]
    pub workout_time: String,
}

fn default_workout_time() -> String {
    "16:00".to_string()
}

/// POST /api/nutrition/glucose-curve
///
/// Simulated glucose/energy curve for a meal type.
pub async fn handle_glucose_curve(
    Json(request): Json<GlucoseRequest>,
) -> Result<Json<GlucoseCurveResult>, AppError> {
    // `!(x > 0)` also rejects NaN.
    if !(request.duration_hours > 0.0) || !request.duration_hours.is_finite() {
        return Err(AppError::Validation(
            "duration_hours must be a positive number".to_string(),
        ));
    }

    Ok(Json(compute_curve(
        request.meal_type,
        request.duration_hours,
        DEFAULT_SAMPLE_COUNT,
    )))
}

/// POST /api/nutrition/nutrient-timing
///
/// Optimal meal timing around a workout time.
pub async fn handle_nutrient_timing(
    Json(request): Json<NutrientTimingRequest>,
) -> Result<Json<NutrientTimingResult>, AppError> {
    let workout_time = clock::parse_hhmm(&request.workout_time).ok_or_else(|| {
        AppError::Validation(format!(
            "workout_time must be HH:MM, got '{}'",
            request.workout_time
        ))
    })?;

    Ok(Json(compute_nutrient_timing(workout_time)))
}

/// GET /api/nutrition/compare-curves
///
/// Default curves for all four meal types, keyed by wire name, for
/// side-by-side comparison.
pub async fn handle_compare_curves() -> Result<Json<Value>, AppError> {
    let mut curves = Map::new();
    for meal_type in MealType::ALL {
        let result = compute_curve(meal_type, DEFAULT_DURATION_HOURS, DEFAULT_SAMPLE_COUNT);
        let value = serde_json::to_value(&result).map_err(|e| AppError::Internal(e.into()))?;
        curves.insert(meal_type.wire_name().to_string(), value);
    }
    Ok(Json(Value::Object(curves)))
}
