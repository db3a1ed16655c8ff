//! Business logic services for the application layer.

pub mod pagination;
pub mod shortener_service;

pub use pagination::Page;
pub use shortener_service::{ShortUrlSummary, ShortenerService, VisitSummary};
