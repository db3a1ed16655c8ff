//! DTOs for short URL listing, visitor listing and counting.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry of `GET /api/urls`.
#[derive(Debug, Serialize)]
pub struct ShortUrlItem {
    #[serde(rename = "original")]
    pub original_url: String,
    /// Full public short URL.
    #[serde(rename = "shorten")]
    pub short_url: String,
    #[serde(rename = "total_visitor")]
    pub total_visitors: i64,
    pub created_at: DateTime<Utc>,
}

/// One entry of `GET /api/urls/{code}/visitors`.
#[derive(Debug, Serialize)]
pub struct VisitorItem {
    pub ip: String,
    #[serde(rename = "original")]
    pub original_url: String,
    #[serde(rename = "shorten")]
    pub short_url: String,
    #[serde(rename = "time_visited")]
    pub visited_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total_urls: i64,
}
