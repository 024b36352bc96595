//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PageRequest};
use crate::error::AppError;

/// Query parameters of the movie listing endpoint.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct MovieListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 20, message = "per_page must be between 1 and 20"))]
    pub per_page: Option<u32>,
}

impl MovieListParams {
    /// Validates the parameters and converts them into a [`PageRequest`].
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `per_page`: 10
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` is 0 or `per_page` is
    /// outside `1..=20`.
    pub fn to_page_request(&self) -> Result<PageRequest, AppError> {
        self.validate()?;

        Ok(PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.per_page.unwrap_or(DEFAULT_PER_PAGE),
        ))
    }
}
