//! Document store — append-only JSONB collections over Postgres.
//!
//! Collections mirror the demo's domains: users, sleep/meal/workout logs, and
//! AI schedule results. The pool is lazy so the service starts (and the pure
//! endpoints work) with no database running; writes are best-effort at the
//! call sites.

use anyhow::Result;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    SleepLogs,
    MealLogs,
    WorkoutLogs,
    Schedules,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::SleepLogs,
        Collection::MealLogs,
        Collection::WorkoutLogs,
        Collection::Schedules,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::SleepLogs => "sleep_logs",
            Collection::MealLogs => "meal_logs",
            Collection::WorkoutLogs => "workout_logs",
            Collection::Schedules => "schedules",
        }
    }
}

/// Creates the PostgreSQL connection pool. Lazy: no connection is attempted
/// until the first query, so startup succeeds without a reachable database.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(database_url)?;
    Ok(pool)
}

/// Creates the collection tables if they do not exist. The first real
/// round-trip to the database — failure here means persistence is off.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for collection in Collection::ALL {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                doc JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
            collection.table()
        );
        sqlx::query(&sql).execute(pool).await?;
    }
    info!("collection tables ready");
    Ok(())
}

/// Appends one document to a collection.
pub async fn insert_document(
    pool: &PgPool,
    collection: Collection,
    doc: &Value,
) -> Result<(), sqlx::Error> {
    let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", collection.table());
    sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(doc)
        .execute(pool)
        .await?;
    Ok(())
}

/// Number of documents in a collection.
pub async fn count_documents(pool: &PgPool, collection: Collection) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", collection.table());
    sqlx::query_scalar(&sql).fetch_one(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_table_names() {
        assert_eq!(Collection::Users.table(), "users");
        assert_eq!(Collection::Schedules.table(), "schedules");
        assert_eq!(Collection::ALL.len(), 5);
    }
}
