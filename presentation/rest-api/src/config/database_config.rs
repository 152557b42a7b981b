use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables and
/// apply pending migrations.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory of SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DatabaseConfig::DEFAULT_MAX_CONNECTIONS);
    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;
    Ok(pool)
}
