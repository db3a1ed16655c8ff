//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::{StoreError, VisitRepository};

/// PostgreSQL repository for visit records.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VisitRow {
    ip: String,
    visited_at: DateTime<Utc>,
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    /// Inserts the visit and bumps `short_urls.total_visitors` in one
    /// statement. An unknown `short_url_id` fails on the foreign key.
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            WITH inserted AS (
                INSERT INTO visits (short_url_id, ip, visited_at)
                VALUES ($1, $2, $3)
                RETURNING short_url_id
            )
            UPDATE short_urls
            SET total_visitors = total_visitors + 1
            WHERE id = (SELECT short_url_id FROM inserted)
            "#,
        )
        .bind(visit.short_url_id)
        .bind(&visit.ip)
        .bind(visit.visited_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_visits(
        &self,
        short_url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Visit>, StoreError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT ip, visited_at
            FROM visits
            WHERE short_url_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(short_url_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Visit {
                ip: r.ip,
                visited_at: r.visited_at,
            })
            .collect())
    }

    async fn count_visits(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visits")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
