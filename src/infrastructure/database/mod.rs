pub mod entities;
pub mod migrator;
pub mod repositories;

use std::future::Future;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::domain::{DomainError, DomainResult};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./parkar.db?mode=rwc" or "postgres://...")
    pub url: String,
    pub max_connections: u32,
    pub timeouts: QueryTimeouts,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./parkar.db?mode=rwc".to_string(),
            max_connections: 10,
            timeouts: QueryTimeouts::default(),
        }
    }
}

/// Upper bounds for a single repository call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTimeouts {
    pub general: Duration,
    /// Availability search and ticket listings
    pub heavy: Duration,
}

impl Default for QueryTimeouts {
    fn default() -> Self {
        Self {
            general: Duration::from_secs(60),
            heavy: Duration::from_secs(120),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}

pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e {
        DbErr::RecordNotFound(what) => DomainError::NotFound {
            entity: "Record",
            field: "id",
            value: what,
        },
        other => {
            log::error!("Database error: {}", other);
            DomainError::Internal(format!("Database error: {}", other))
        }
    }
}

/// Run a query future under `limit`, mapping both failure modes into
/// domain errors.
pub(crate) async fn timed<T, F>(limit: Duration, fut: F) -> DomainResult<T>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(db_err),
        Err(_) => {
            log::warn!("Query exceeded {}s", limit.as_secs());
            Err(DomainError::Timeout(limit.as_secs()))
        }
    }
}

/// In-memory SQLite with every migration applied
#[cfg(test)]
pub(crate) async fn test_db() -> DatabaseConnection {
    use sea_orm_migration::MigratorTrait;

    let mut opts = ConnectOptions::new("sqlite::memory:");
    // A second pooled connection would open a separate empty database.
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    migrator::Migrator::up(&db, None).await.unwrap();
    db
}
