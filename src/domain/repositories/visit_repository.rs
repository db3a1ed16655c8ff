//! Repository trait for visit tracking.

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Storage for recorded visits.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Records one visit.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the short URL does not exist or the
    /// write fails.
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), StoreError>;

    /// Lists visits of one short URL in recording order.
    async fn list_visits(
        &self,
        short_url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Visit>, StoreError>;

    /// Counts every recorded visit across all short URLs.
    async fn count_visits(&self) -> Result<i64, StoreError>;
}
