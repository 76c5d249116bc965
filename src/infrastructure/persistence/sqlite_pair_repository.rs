//! SQLite implementation of the pair repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlPair, UrlPair};
use crate::domain::repositories::PairRepository;
use crate::error::AppError;

/// Schema of the pair table. Both columns carry their own unique index.
const CREATE_PAIRS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url_pairs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        original_url TEXT NOT NULL UNIQUE,
        short_code VARCHAR(10) NOT NULL UNIQUE,
        created_at TEXT NOT NULL
    )
"#;

#[derive(sqlx::FromRow)]
struct PairRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<PairRow> for UrlPair {
    fn from(row: PairRow) -> Self {
        UrlPair::new(row.id, row.original_url, row.short_code, row.created_at)
    }
}

/// SQLite repository for URL pairs.
///
/// Every operation checks a connection out of the pool for its own duration
/// only; the guard returns it on drop, on success and on error alike. Writes
/// run in a transaction that rolls back if it is dropped before commit.
pub struct SqlitePairRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePairRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PairRepository for SqlitePairRepository {
    async fn initialize(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(CREATE_PAIRS_TABLE).execute(&mut *conn).await?;

        Ok(())
    }

    async fn insert(&self, new_pair: NewUrlPair) -> Result<UrlPair, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PairRow>(
            r#"
            INSERT INTO url_pairs (original_url, short_code, created_at)
            VALUES (?, ?, ?)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(new_pair.original_url())
        .bind(new_pair.short_code())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::AlreadyExists { message, details } => AppError::AlreadyExists {
                message,
                details: json!({
                    "original_url": new_pair.original_url(),
                    "short_code": new_pair.short_code(),
                    "constraint": details["constraint"],
                }),
            },
            other => other,
        })?;

        tx.commit().await?;

        tracing::debug!(short_code = %row.short_code, "url pair inserted");
        Ok(row.into())
    }

    async fn find_original_by_code(&self, code: &str) -> Result<String, AppError> {
        let mut conn = self.pool.acquire().await?;

        let original_url = sqlx::query_scalar::<_, String>(
            "SELECT original_url FROM url_pairs WHERE short_code = ?",
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?;

        original_url.ok_or_else(|| {
            AppError::not_found(
                "No original URL found for this short code",
                json!({ "code": code }),
            )
        })
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM url_pairs WHERE short_code = ?")
            .bind(code)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "URL pair not found",
                json!({ "code": code }),
            ));
        }

        tracing::debug!(short_code = %code, "url pair deleted");
        Ok(())
    }

    async fn delete_by_original_url(&self, original_url: &str) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM url_pairs WHERE original_url = ?")
            .bind(original_url)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "URL pair not found",
                json!({ "original_url": original_url }),
            ));
        }

        tracing::debug!(original_url = %original_url, "url pair deleted");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UrlPair>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, PairRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM url_pairs
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(UrlPair::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("SELECT 1").execute(&mut *conn).await?;

        Ok(())
    }
}
