//! Translation of SQLx failures into store errors.

use crate::domain::repositories::StoreError;

/// Name of the uniqueness constraint on `short_urls.original_url`.
pub const ORIGINAL_URL_UNIQUE: &str = "short_urls_original_url_key";

pub fn is_unique_violation_on_original_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ORIGINAL_URL_UNIQUE))
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_original_url(&e) {
            StoreError::DuplicateUrl
        } else {
            StoreError::backend(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_backend() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn test_pool_timeout_is_not_duplicate() {
        assert!(!is_unique_violation_on_original_url(
            &sqlx::Error::PoolTimedOut
        ));
    }
}
