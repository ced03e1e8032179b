use std::sync::Arc;

use sqlx::PgPool;

use crate::coach::planner::SchedulePlanner;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable schedule planner. Gemini when a key is configured, with the
    /// rule-based plan as the always-available fallback.
    pub planner: Arc<dyn SchedulePlanner>,
    /// Kept for handlers that need runtime settings; currently only read at startup.
    #[allow(dead_code)]
    pub config: Config,
}
