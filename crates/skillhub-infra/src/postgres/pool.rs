//! PostgreSQL connection pool setup.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Table layout for the catalog. The table is created if it does not exist yet;
/// existing tables are left untouched.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS skills (
    key         TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    logo        TEXT NOT NULL DEFAULT '',
    levels      JSONB NOT NULL DEFAULT '[]'::jsonb,
    tags        TEXT[] NOT NULL DEFAULT '{}'
)";

/// Open a PostgreSQL pool and make sure the `skills` table exists.
///
/// The pool is created once at startup and shared (cloned) by every
/// repository instance.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;

    sqlx::query(SCHEMA).execute(&pool).await?;

    tracing::debug!(max_connections, "PostgreSQL pool ready");
    Ok(pool)
}
