//! Postgres connection pool.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Create a new connection pool from already-resolved connect options.
///
/// Connects eagerly so a misconfigured database fails at startup rather than
/// on the first request. `max_connections` controls the pool ceiling.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DbPool, DbError> {
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or("<default>"),
        "Connecting to database (max_connections={})",
        max_connections
    );
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    info!("Successfully connected to PostgreSQL");
    Ok(pool)
}

/// Run embedded SQLx migrations located in `./migrations` (relative to the
/// workspace root at build time).
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Running database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
