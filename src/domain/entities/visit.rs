//! Visit entity representing a single redirect.

use chrono::{DateTime, Utc};

/// A recorded visit to a short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub ip: String,
    pub visited_at: DateTime<Utc>,
}

/// Input data for recording a visit.
///
/// `short_url_id` must reference an existing short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub short_url_id: i64,
    pub ip: String,
    pub visited_at: DateTime<Utc>,
}

impl NewVisit {
    pub fn new(short_url_id: i64, ip: impl Into<String>, visited_at: DateTime<Utc>) -> Self {
        Self {
            short_url_id,
            ip: ip.into(),
            visited_at,
        }
    }
}
