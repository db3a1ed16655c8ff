//! HTTP middleware for request processing and protection.
//!
//! Provides admission control, cross-origin policy and observability
//! middleware.

pub mod cors;
pub mod rate_limit;
pub mod tracing;
