//! Errors raised at the store boundary.

use thiserror::Error;

/// Failure reported by a repository implementation.
///
/// The service layer translates these into [`crate::error::AppError`]; only
/// [`StoreError::DuplicateUrl`] carries meaning beyond "the store failed".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The original URL violates the uniqueness constraint.
    #[error("original URL is already registered")]
    DuplicateUrl,

    /// Any other backend failure (connection, query, constraint).
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}
