pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::coach::handlers as coach;
use crate::mock;
use crate::nutrition::handlers as nutrition;
use crate::sleep::handlers as sleep;
use crate::state::AppState;

/// GET /
/// Service banner with the endpoint map.
async fn index_handler() -> Json<Value> {
    Json(json!({
        "name": "Circadian Rhythm Optimizer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "coach": "/api/coach/analyze",
            "sleep": "/api/sleep/optimize",
            "nutrition_glucose": "/api/nutrition/glucose-curve",
            "nutrition_timing": "/api/nutrition/nutrient-timing",
            "nutrition_compare": "/api/nutrition/compare-curves",
            "mock_data": "/api/mock/week",
        },
    }))
}

/// GET /api/mock/week
/// Pre-loaded mock student week for the demo frontend.
async fn mock_week_handler() -> Json<mock::MockWeek> {
    Json(mock::mock_week())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health::health_handler))
        // Sleep
        .route("/api/sleep/optimize", post(sleep::handle_optimize_sleep))
        // Nutrition
        .route(
            "/api/nutrition/glucose-curve",
            post(nutrition::handle_glucose_curve),
        )
        .route(
            "/api/nutrition/nutrient-timing",
            post(nutrition::handle_nutrient_timing),
        )
        .route(
            "/api/nutrition/compare-curves",
            get(nutrition::handle_compare_curves),
        )
        // Coach
        .route("/api/coach/analyze", post(coach::handle_analyze))
        .route("/api/coach/mock", get(coach::handle_mock_schedule))
        // Demo data
        .route("/api/mock/week", get(mock_week_handler))
        .with_state(state)
}
