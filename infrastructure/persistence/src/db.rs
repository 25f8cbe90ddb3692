use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    Connection(#[source] sqlx::Error),
    #[error("database.migrations_dir_missing")]
    MigrationsDirMissing(String),
    #[error("database.migration_error")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

/// Connection settings for the storefront database.
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a configuration with defaults sized for a small storefront.
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Opens a PostgreSQL connection pool.
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::Connection)
}

/// Applies pending migrations from the given directory.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        return Err(DatabaseError::MigrationsDirMissing(
            migrations_path.to_string(),
        ));
    }

    let migrator = sqlx::migrate::Migrator::new(path)
        .await
        .map_err(DatabaseError::Migration)?;
    migrator.run(pool).await.map_err(DatabaseError::Migration)
}
