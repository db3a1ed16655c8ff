use std::sync::Arc;

use crate::application::rate_limiter::TokenBucket;
use crate::application::services::ShortenerService;

/// Shared handles injected into every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub limiter: Arc<TokenBucket>,
    /// Public prefix of short URLs, without a trailing slash.
    pub base_url: Arc<str>,
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        limiter: Arc<TokenBucket>,
        base_url: &str,
        behind_proxy: bool,
    ) -> Self {
        Self {
            shortener,
            limiter,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            behind_proxy,
        }
    }

    /// Public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
