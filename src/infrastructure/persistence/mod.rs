//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage
//! - [`PgBookRepository`] - Book storage
//!
//! Multi-statement changes go through [`with_transaction`].

pub mod pg_book_repository;
pub mod pg_user_repository;
pub mod transaction;

pub use pg_book_repository::PgBookRepository;
pub use pg_user_repository::PgUserRepository;
pub use transaction::{TxFuture, with_transaction};

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the connection pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres storage backend")?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply migrations")
}
