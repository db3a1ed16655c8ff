//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the visitor IP (peer address, or `X-Forwarded-For` behind a proxy)
/// 2. Decode the code and look up the record
/// 3. Check the stored URL is a valid `Location` value
/// 4. Record the visit; a failure here is logged and does not block the redirect
/// 5. Return 301 Moved Permanently
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown, and 500 if the
/// stored URL cannot be sent as a header. No visit is recorded in either case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1]), AppError> {
    let ip = client_ip(&headers, addr, state.behind_proxy);

    let location = state.shortener.redirect_and_record(&code, &ip).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
