//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::PageRequest;

/// Pagination query parameters.
///
/// Values that are not positive integers (`abc`, an empty string) are
/// treated as absent, so the defaults apply.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Converts to a page request with defaults of page 1 and limit 10.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}
