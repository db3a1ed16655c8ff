//! Page-size / page-index validation shared by the listing operations.

use crate::error::AppError;
use serde_json::json;

/// Largest page a client may request.
const MAX_PAGE_SIZE: i64 = 100;

/// A validated page request.
///
/// `page_index` is 1-based; construction fails before any store access when
/// either value is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page_size: i64,
    offset: i64,
}

impl Page {
    /// Validates `1 <= page_size <= 100` and `page_index >= 1`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for out-of-range values, or when the
    /// resulting offset does not fit in an `i64`.
    pub fn new(page_size: i64, page_index: i64) -> Result<Self, AppError> {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                "Invalid value for page_size, must be a positive integer smaller than or equal 100",
                json!({ "page_size": page_size }),
            ));
        }

        if page_index < 1 {
            return Err(AppError::bad_request(
                "Invalid value for page_index, must be a positive integer",
                json!({ "page_index": page_index }),
            ));
        }

        let offset = (page_index - 1).checked_mul(page_size).ok_or_else(|| {
            AppError::bad_request(
                "Invalid value for page_index, page is out of range",
                json!({ "page_index": page_index }),
            )
        })?;

        Ok(Self { page_size, offset })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}
