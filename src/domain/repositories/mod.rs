//! Repository trait definitions for the domain layer.
//!
//! These traits are the store contract the shortening service depends on.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mocks are generated with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short URL insertion, lookup, listing and counting
//! - [`VisitRepository`] - Visit recording and listing

pub mod error;
pub mod url_repository;
pub mod visit_repository;

pub use error::StoreError;
pub use url_repository::UrlRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
