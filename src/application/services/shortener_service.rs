//! URL shortening, redirect resolution and visitor bookkeeping.

use std::sync::Arc;

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use serde_json::json;

use crate::application::services::pagination::Page;
use crate::domain::entities::NewVisit;
use crate::domain::repositories::{UrlRepository, VisitRepository};
use crate::error::AppError;
use crate::utils::base62;

/// A short URL as returned by [`ShortenerService::list_short_urls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlSummary {
    pub original_url: String,
    pub short_code: String,
    pub total_visitors: i64,
    pub created_at: DateTime<Utc>,
}

/// A visit as returned by [`ShortenerService::list_visitors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitSummary {
    pub ip: String,
    pub original_url: String,
    pub short_code: String,
    pub visited_at: DateTime<Utc>,
}

/// Orchestrates the request lifecycle around the store.
///
/// Every operation runs after the admission gate has accepted the request.
/// Store identifiers cross the API boundary only as base62 short codes.
/// Nothing is cached between calls and nothing is retried.
pub struct ShortenerService {
    urls: Arc<dyn UrlRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(urls: Arc<dyn UrlRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { urls, visits }
    }

    /// Stores `original_url` and returns its short code.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is empty
    /// - [`AppError::DuplicateUrl`] if the URL was already shortened
    /// - [`AppError::Internal`] on any other store failure
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, original_url: &str) -> Result<String, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request("url should not be empty", json!({})));
        }

        let id = self.urls.insert_url(original_url).await?;
        let code = short_code(id)?;

        tracing::info!(id, code = %code, "Short URL created");
        Ok(code)
    }

    /// Resolves `code` to its original URL and records the visit.
    ///
    /// Visit recording goes through [`Self::record_visit`] and cannot fail this
    /// operation. The returned target is always a valid `Location` value; a
    /// stored URL that is not fails before any visit is recorded.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is malformed or has no record
    /// - [`AppError::Internal`] if the lookup fails or the stored URL cannot
    ///   be sent as a `Location` header
    #[tracing::instrument(skip(self))]
    pub async fn redirect_and_record(
        &self,
        code: &str,
        visitor_ip: &str,
    ) -> Result<HeaderValue, AppError> {
        let id = resolve_code(code)?;

        let short_url = self
            .urls
            .get_url_by_id(id)
            .await?
            .ok_or_else(|| unknown_code(code))?;

        let location = HeaderValue::from_str(&short_url.original_url).map_err(|e| {
            tracing::error!(id, error = %e, "Stored URL is not a valid Location header");
            AppError::internal("Internal server error", json!({}))
        })?;

        self.record_visit(id, visitor_ip).await;

        Ok(location)
    }

    /// Lists short URLs in store order.
    ///
    /// Pagination is validated before the store is touched.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an invalid page
    /// - [`AppError::Internal`] on store failure
    #[tracing::instrument(skip(self))]
    pub async fn list_short_urls(
        &self,
        page_size: i64,
        page_index: i64,
    ) -> Result<Vec<ShortUrlSummary>, AppError> {
        let page = Page::new(page_size, page_index)?;

        let rows = self.urls.list_urls(page.offset(), page.limit()).await?;

        rows.into_iter()
            .map(|row| {
                Ok(ShortUrlSummary {
                    short_code: short_code(row.id)?,
                    original_url: row.original_url,
                    total_visitors: row.total_visitors,
                    created_at: row.created_at,
                })
            })
            .collect()
    }

    /// Lists the visits of the short URL identified by `code`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an invalid page
    /// - [`AppError::NotFound`] if the code is malformed or has no record
    /// - [`AppError::Internal`] on store failure
    #[tracing::instrument(skip(self))]
    pub async fn list_visitors(
        &self,
        code: &str,
        page_size: i64,
        page_index: i64,
    ) -> Result<Vec<VisitSummary>, AppError> {
        let page = Page::new(page_size, page_index)?;
        let id = resolve_code(code)?;

        let short_url = self
            .urls
            .get_url_by_id(id)
            .await?
            .ok_or_else(|| unknown_code(code))?;

        let visits = self
            .visits
            .list_visits(id, page.offset(), page.limit())
            .await?;

        let short_code = short_code(short_url.id)?;
        Ok(visits
            .into_iter()
            .map(|visit| VisitSummary {
                ip: visit.ip,
                original_url: short_url.original_url.clone(),
                short_code: short_code.clone(),
                visited_at: visit.visited_at,
            })
            .collect())
    }

    /// Counts all short URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn count_short_urls(&self) -> Result<i64, AppError> {
        Ok(self.urls.count_urls().await?)
    }

    /// Records a visit on the best-effort, log-only path.
    ///
    /// Redirect availability takes priority over visit completeness: a failed
    /// insert is logged and dropped. It is never retried and never reaches the
    /// caller.
    async fn record_visit(&self, short_url_id: i64, visitor_ip: &str) {
        let visit = NewVisit::new(short_url_id, visitor_ip, Utc::now());

        if let Err(e) = self.visits.insert_visit(visit).await {
            tracing::warn!(
                short_url_id,
                ip = visitor_ip,
                error = %e,
                "Failed to record visit"
            );
        }
    }
}

/// Encodes a store identifier. A negative identifier is a store fault.
fn short_code(id: i64) -> Result<String, AppError> {
    let id = u64::try_from(id).map_err(|_| {
        tracing::error!(id, "Store returned a negative identifier");
        AppError::internal("Internal server error", json!({}))
    })?;
    Ok(base62::encode(id))
}

/// Decodes a short code into a store identifier.
///
/// Codes that are malformed or exceed the identifier range cannot match any
/// record, so they are reported as not found.
fn resolve_code(code: &str) -> Result<i64, AppError> {
    base62::decode(code)
        .ok()
        .and_then(|n| i64::try_from(n).ok())
        .ok_or_else(|| unknown_code(code))
}

fn unknown_code(code: &str) -> AppError {
    AppError::not_found("This URL does not exist", json!({ "code": code }))
}
