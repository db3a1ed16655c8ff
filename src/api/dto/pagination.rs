//! Pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

/// `page_size` / `page_index` query parameters.
///
/// Both are required. Range checks happen in
/// [`crate::application::services::Page`].
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_index: Option<i64>,
}

impl PageParams {
    /// Returns `(page_size, page_index)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either parameter is missing.
    pub fn required(&self) -> Result<(i64, i64), AppError> {
        let page_size = self.page_size.ok_or_else(|| missing("page_size"))?;
        let page_index = self.page_index.ok_or_else(|| missing("page_index"))?;
        Ok((page_size, page_index))
    }
}

fn missing(param: &str) -> AppError {
    AppError::bad_request(
        format!("Missing query parameter {}", param),
        json!({ "parameter": param }),
    )
}
