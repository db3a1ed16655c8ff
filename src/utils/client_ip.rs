//! Visitor IP extraction from HTTP requests.

use axum::http::HeaderMap;
use std::net::SocketAddr;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Returns the IP address recorded for a visit.
///
/// When `behind_proxy` is set, the first entry of `X-Forwarded-For` wins; an
/// absent or blank header falls back to the socket peer. Otherwise the header
/// is ignored, since clients can set it to anything.
///
/// # Examples
///
/// ```
/// use axum::http::HeaderMap;
/// use tinylink::utils::client_ip::client_ip;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
/// let peer = "127.0.0.1:5000".parse().unwrap();
///
/// assert_eq!(client_ip(&headers, peer, true), "203.0.113.7");
/// assert_eq!(client_ip(&headers, peer, false), "127.0.0.1");
/// ```
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy
        && let Some(forwarded) = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    {
        return forwarded.to_string();
    }

    peer.ip().to_string()
}
