//! In-process store backing both repositories.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::entities::{NewVisit, ShortUrl, Visit};
use crate::domain::repositories::{StoreError, UrlRepository, VisitRepository};

/// In-memory implementation of [`UrlRepository`] and [`VisitRepository`].
///
/// Identifiers are positions in an append-only vector plus one, so they start
/// at 1 and never repeat. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    urls: Vec<ShortUrl>,
    by_original: HashMap<String, i64>,
    visits: HashMap<i64, Vec<Visit>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn url_mut(&mut self, id: i64) -> Option<&mut ShortUrl> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.urls.get_mut(idx)
    }

    fn url(&self, id: i64) -> Option<&ShortUrl> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.urls.get(idx)
    }
}

/// Clamps a validated `(offset, limit)` pair to slice bounds.
fn window(len: usize, offset: i64, limit: i64) -> std::ops::Range<usize> {
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
    let take = usize::try_from(limit).unwrap_or(0);
    start..start.saturating_add(take).min(len)
}

#[async_trait]
impl UrlRepository for InMemoryStore {
    async fn insert_url(&self, original_url: &str) -> Result<i64, StoreError> {
        let mut inner = self.inner.write();

        if inner.by_original.contains_key(original_url) {
            return Err(StoreError::DuplicateUrl);
        }

        let id = i64::try_from(inner.urls.len() + 1).map_err(StoreError::backend)?;
        inner
            .urls
            .push(ShortUrl::new(id, original_url.to_string(), 0, Utc::now()));
        inner.by_original.insert(original_url.to_string(), id);

        Ok(id)
    }

    async fn get_url_by_id(&self, id: i64) -> Result<Option<ShortUrl>, StoreError> {
        Ok(self.inner.read().url(id).cloned())
    }

    async fn list_urls(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, StoreError> {
        let inner = self.inner.read();
        let range = window(inner.urls.len(), offset, limit);
        Ok(inner.urls[range].to_vec())
    }

    async fn count_urls(&self) -> Result<i64, StoreError> {
        i64::try_from(self.inner.read().urls.len()).map_err(StoreError::backend)
    }
}

#[async_trait]
impl VisitRepository for InMemoryStore {
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        let Some(url) = inner.url_mut(visit.short_url_id) else {
            return Err(StoreError::backend(format!(
                "short url {} does not exist",
                visit.short_url_id
            )));
        };
        url.total_visitors += 1;

        inner
            .visits
            .entry(visit.short_url_id)
            .or_default()
            .push(Visit {
                ip: visit.ip,
                visited_at: visit.visited_at,
            });

        Ok(())
    }

    async fn list_visits(
        &self,
        short_url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Visit>, StoreError> {
        let inner = self.inner.read();
        let Some(visits) = inner.visits.get(&short_url_id) else {
            return Ok(Vec::new());
        };

        let range = window(visits.len(), offset, limit);
        Ok(visits[range].to_vec())
    }

    async fn count_visits(&self) -> Result<i64, StoreError> {
        let total: usize = self.inner.read().visits.values().map(Vec::len).sum();
        i64::try_from(total).map_err(StoreError::backend)
    }
}
