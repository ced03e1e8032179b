mod clock;
mod coach;
mod config;
mod db;
mod errors;
mod llm_client;
mod mock;
mod nutrition;
mod routes;
mod sleep;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::coach::planner::{PlannerStack, SchedulePlanner};
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Circadian Rhythm Optimizer API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Persistence is best-effort: the pool is lazy, and a missing database
    // only disables the log collections, never the numeric endpoints.
    let db = create_pool(&config.database_url)?;
    match db::ensure_schema(&db).await {
        Ok(()) => {
            if let Err(e) = mock::seed_mock_data(&db).await {
                warn!("mock data seed failed: {e}");
            }
        }
        Err(e) => warn!("database unavailable, continuing without persistence: {e}"),
    }

    // Planner: Gemini primary when a key is configured, rule-based otherwise.
    let planner: Arc<dyn SchedulePlanner> = Arc::new(PlannerStack::from_config(&config));
    info!("schedule planner initialized (backend: {})", planner.backend());

    let state = AppState {
        db,
        planner,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // demo service — the Next.js dev server needs open CORS

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
