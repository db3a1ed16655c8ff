//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short URL redirect
//! - `GET  /health`      - Health check: store and rate limiter
//! - `/api/*`            - REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Public origin only
//! - **Rate limiting** - One process-wide token bucket, every route except `/health`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
///
/// `state` is injected into all handlers; its limiter guards every route
/// except the health check.
pub fn router(state: AppState) -> Router {
    let limited = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::layer,
        ));

    Router::new()
        .merge(limited)
        .route("/health", get(health_handler))
        .layer(cors::layer(&state.base_url))
        .with_state(state)
        .layer(tracing::layer())
}
