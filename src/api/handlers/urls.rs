//! Handlers for short URL listing, visitor listing and counting.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::pagination::PageParams;
use crate::api::dto::urls::{CountResponse, ShortUrlItem, VisitorItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists short URLs with their visitor counts.
///
/// # Endpoint
///
/// `GET /api/urls?page_size=10&page_index=1`
///
/// `page_size` must be within `1..=100` and `page_index` at least 1.
///
/// # Response
///
/// ```json
/// [
///   {
///     "original": "https://example.com",
///     "shorten": "http://localhost:8080/1",
///     "total_visitor": 3,
///     "created_at": "2026-01-02T03:04:05Z"
///   }
/// ]
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<ShortUrlItem>>, AppError> {
    let Query(params) = params?;
    let (page_size, page_index) = params.required()?;

    let urls = state
        .shortener
        .list_short_urls(page_size, page_index)
        .await?;

    let items = urls
        .into_iter()
        .map(|url| ShortUrlItem {
            short_url: state.short_url(&url.short_code),
            original_url: url.original_url,
            total_visitors: url.total_visitors,
            created_at: url.created_at,
        })
        .collect();

    Ok(Json(items))
}

/// Lists the visits of one short URL.
///
/// # Endpoint
///
/// `GET /api/urls/{code}/visitors?page_size=10&page_index=1`
///
/// # Errors
///
/// - 400 for invalid pagination
/// - 404 if the code is malformed or unknown
pub async fn list_visitors_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<VisitorItem>>, AppError> {
    let Query(params) = params?;
    let (page_size, page_index) = params.required()?;

    let visits = state
        .shortener
        .list_visitors(&code, page_size, page_index)
        .await?;

    let items = visits
        .into_iter()
        .map(|visit| VisitorItem {
            ip: visit.ip,
            short_url: state.short_url(&visit.short_code),
            original_url: visit.original_url,
            visited_at: visit.visited_at,
        })
        .collect();

    Ok(Json(items))
}

/// `GET /api/urls/count`
pub async fn count_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let total_urls = state.shortener.count_short_urls().await?;

    Ok(Json(CountResponse { total_urls }))
}
