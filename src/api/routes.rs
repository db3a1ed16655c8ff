//! API route configuration.

use crate::api::handlers::{
    count_urls_handler, list_urls_handler, list_visitors_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /urls`                 - Shorten a URL
/// - `GET  /urls`                 - List short URLs (paginated)
/// - `GET  /urls/count`           - Count short URLs
/// - `GET  /urls/{code}/visitors` - List visits of a short URL (paginated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler).post(shorten_handler))
        .route("/urls/count", get(count_urls_handler))
        .route("/urls/{code}/visitors", get(list_visitors_handler))
}
