//! Database connection pool management
//!
//! Pool limits are left to sqlx unless the caller asks for a cap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a PostgreSQL connection pool with sqlx's default limits.
///
/// # Errors
///
/// Returns an error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://postgres@localhost:5432/DemoDB").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, None).await
}

/// Create a PostgreSQL connection pool, optionally capping its size.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections, `None` for the sqlx default
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: Option<u32>,
) -> Result<PgPool, sqlx::Error> {
    let mut options = PgPoolOptions::new();
    if let Some(max) = max_connections {
        options = options.max_connections(max);
    }

    let pool = options.connect(database_url).await?;
    tracing::debug!(
        max_connections = pool.options().get_max_connections(),
        "database pool ready"
    );
    Ok(pool)
}
