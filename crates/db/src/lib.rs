//! Storage layer for the stockroom order service.
//!
//! Owns the SQLite pool, the embedded schema migrations, the fixture seed
//! and the repository used by HTTP handlers.

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;
mod seed;

pub use seed::seed_fixtures;

pub type DbPool = sqlx::SqlitePool;

/// Errors raised while preparing the database at startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),

    #[error("Failed to seed fixture orders: {0}")]
    Seed(#[from] sqlx::Error),
}

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet. WAL mode lets
/// list requests read while a create is committing.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Migrate, then seed fixtures into an empty table.
///
/// Returns the number of fixture rows inserted.
pub async fn bootstrap(pool: &DbPool) -> Result<u64, BootstrapError> {
    run_migrations(pool).await?;
    let inserted = seed_fixtures(pool).await?;
    Ok(inserted)
}
