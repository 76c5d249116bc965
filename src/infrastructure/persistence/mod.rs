//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqlitePairRepository`] - URL pair storage and retrieval

pub mod sqlite_pair_repository;

pub use sqlite_pair_repository::SqlitePairRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::is_memory_database;
use crate::error::AppError;

/// Opens a connection pool for the given SQLite URL.
///
/// File databases are created if missing. An in-memory database lives inside a
/// single connection, so the pool is pinned to exactly one connection that is
/// never recycled.
///
/// # Errors
///
/// Returns [`AppError::StorageUnavailable`] if the URL is malformed or the
/// database cannot be opened.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_memory_database(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await?;

    Ok(pool)
}
