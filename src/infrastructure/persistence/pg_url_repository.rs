//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::{StoreError, UrlRepository};

/// PostgreSQL repository for short URLs.
///
/// Identifiers come from the `short_urls.id` sequence. `total_visitors` is a
/// column kept current by [`PgVisitRepository`](super::PgVisitRepository), so
/// lookups never scan `visits`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ShortUrlRow {
    id: i64,
    original_url: String,
    total_visitors: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl::new(r.id, r.original_url, r.total_visitors, r.created_at)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert_url(&self, original_url: &str) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO short_urls (original_url)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn get_url_by_id(&self, id: i64) -> Result<Option<ShortUrl>, StoreError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, total_visitors, created_at
            FROM short_urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn list_urls(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, StoreError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, total_visitors, created_at
            FROM short_urls
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }

    async fn count_urls(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
