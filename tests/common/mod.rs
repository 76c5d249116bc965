#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use url_pair_shortener::application::services::ShortenerService;
use url_pair_shortener::domain::repositories::PairRepository;
use url_pair_shortener::infrastructure::persistence::{SqlitePairRepository, connect_pool};
use url_pair_shortener::state::{AppState, SqliteShortenerService};

/// Opens a fresh in-memory database with the schema in place.
pub async fn create_test_pool() -> SqlitePool {
    let pool = connect_pool("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();

    SqlitePairRepository::new(Arc::new(pool.clone()))
        .initialize()
        .await
        .unwrap();

    pool
}

/// Opens a fresh on-disk database served by a pool of `max_connections`.
///
/// Keep the returned [`TempDir`] alive for as long as the pool is used.
pub async fn create_file_test_pool(max_connections: u32) -> (SqlitePool, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite://{}", temp_dir.path().join("pairs.db").display());

    let pool = connect_pool(&database_url, max_connections, Duration::from_secs(30))
        .await
        .unwrap();

    SqlitePairRepository::new(Arc::new(pool.clone()))
        .initialize()
        .await
        .unwrap();

    (pool, temp_dir)
}

pub fn create_test_repository(pool: SqlitePool) -> Arc<SqlitePairRepository> {
    Arc::new(SqlitePairRepository::new(Arc::new(pool)))
}

pub fn create_test_service(pool: SqlitePool) -> Arc<SqliteShortenerService> {
    Arc::new(ShortenerService::new(create_test_repository(pool)))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(create_test_service(pool))
}

pub async fn insert_test_pair(pool: &SqlitePool, url: &str, code: &str) {
    sqlx::query("INSERT INTO url_pairs (original_url, short_code, created_at) VALUES (?, ?, ?)")
        .bind(url)
        .bind(code)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_pairs(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_pairs")
        .fetch_one(pool)
        .await
        .unwrap()
}
