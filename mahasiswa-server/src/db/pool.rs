//! Database connection pool management
//!
//! Uses sqlx `AnyPool` so the same statements run against MySQL in
//! production and SQLite in tests. Both drivers accept `?` placeholders.
//!
//! The pool is created once at startup. Broken connections are discarded
//! and replaced on the next lease; a failed statement is never retried.

use std::time::Duration;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::config::{DatabaseConfig, DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};

/// Create a connection pool with default limits.
///
/// Connects eagerly, so an unreachable database fails here rather than on
/// the first request.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("mysql://root@localhost:3306/mahasiswa").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Create a connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - `mysql://...` or `sqlite:...`
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a request waits for a free connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .test_before_acquire(true)
        .connect(database_url)
        .await
}

/// Create a pool from a [`DatabaseConfig`].
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    tracing::info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Connecting to database"
    );
    create_pool_with_options(
        &config.connection_url(),
        config.max_connections,
        config.acquire_timeout,
    )
    .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn ping(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
