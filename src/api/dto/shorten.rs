//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The original URL. Only emptiness is checked.
    #[validate(length(min = 1, message = "url should not be empty"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub shorten_url: String,
}
