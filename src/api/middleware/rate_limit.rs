//! Admission control middleware backed by the shared token bucket.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Rejects the request with `429 Too Many Requests` when the process-wide
/// bucket is empty.
///
/// Runs before any handler, so a refused request never reaches the service
/// or the store. Refusals are not retried.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/urls", post(shorten_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.limiter.allow() {
        tracing::debug!(
            method = %req.method(),
            uri = %req.uri(),
            "Request refused by rate limiter"
        );
        return Err(AppError::RateLimited);
    }

    Ok(next.run(req).await)
}
