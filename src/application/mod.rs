//! Application layer: request orchestration and admission control.
//!
//! - [`services::ShortenerService`] - Shortening, redirect resolution and
//!   visitor listing
//! - [`rate_limiter::TokenBucket`] - Process-wide request admission

pub mod rate_limiter;
pub mod services;
