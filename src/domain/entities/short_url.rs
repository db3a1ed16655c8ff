//! Short URL entity.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// The short code is not stored; it is derived from `id` with
/// [`crate::utils::base62::encode`]. `total_visitors` is computed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub total_visitors: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        total_visitors: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            total_visitors,
            created_at,
        }
    }
}
