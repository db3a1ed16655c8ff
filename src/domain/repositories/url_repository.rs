//! Repository trait for short URL storage.

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Storage for short URLs.
///
/// Identifiers are assigned by the store, start at 1 and increase
/// monotonically. Implementations enforce uniqueness of the original URL and
/// their own concurrency safety.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new original URL and returns its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateUrl`] if the URL is already stored.
    async fn insert_url(&self, original_url: &str) -> Result<i64, StoreError>;

    /// Finds a short URL by identifier.
    ///
    /// Returns `Ok(None)` when no record matches.
    async fn get_url_by_id(&self, id: i64) -> Result<Option<ShortUrl>, StoreError>;

    /// Lists short URLs in creation order, skipping `offset` and returning at
    /// most `limit` rows.
    async fn list_urls(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, StoreError>;

    /// Counts all stored short URLs.
    async fn count_urls(&self) -> Result<i64, StoreError>;
}
