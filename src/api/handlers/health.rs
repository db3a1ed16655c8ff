//! Liveness and readiness probe.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Reports store reachability and limiter headroom.
///
/// # Endpoint
///
/// `GET /health`, outside the rate limiter so probes keep working while
/// clients are being refused.
///
/// # Response Codes
///
/// - **200 OK**: `"healthy"`
/// - **503 Service Unavailable**: `"degraded"`, the store did not answer
///
/// An empty bucket is normal under load and never degrades the status.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Reachable, 42 short URLs" },
///     "rate_limiter": { "status": "ok", "message": "97/100 tokens available, 1 token per 10s" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let checks = HealthChecks {
        store: probe_store(&state).await,
        rate_limiter: limiter_headroom(&state),
    };
    let status = checks.status();

    let code = match status {
        ServiceStatus::Healthy => StatusCode::OK,
        ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    (code, Json(body)).into_response()
}

async fn probe_store(state: &AppState) -> ComponentCheck {
    match state.shortener.count_short_urls().await {
        Ok(count) => ComponentCheck::ok(format!("Reachable, {} short URLs", count)),
        Err(e) => ComponentCheck::failed(format!("Store error: {}", e)),
    }
}

fn limiter_headroom(state: &AppState) -> ComponentCheck {
    let limiter = &state.limiter;
    ComponentCheck::ok(format!(
        "{}/{} tokens available, 1 token per {}s",
        limiter.available(),
        limiter.capacity(),
        limiter.refill_interval().as_secs()
    ))
}
