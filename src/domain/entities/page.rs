//! Pagination input and output for collection listings.

use crate::domain::entities::Recommendation;

/// A normalized page request.
///
/// `page` starts at 1 and `limit` is always positive. Build one with
/// [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Builds a page request. Absent or zero values fall back to the defaults.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(Self::DEFAULT_PAGE),
            limit: limit.filter(|l| *l > 0).unwrap_or(Self::DEFAULT_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Row offset of the first item on this page: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.limit))
    }

    /// Number of pages needed for `total` items, rounded up.
    pub fn total_pages(&self, total: i64) -> i64 {
        let limit = i64::from(self.limit);
        if total <= 0 {
            0
        } else {
            (total + limit - 1) / limit
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of the recommendations saved in a collection.
///
/// `total_recommendations` counts every link of the collection, independent
/// of which page was requested; pages past the end have an empty slice.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPage {
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
    pub total_recommendations: i64,
    pub recommendations: Vec<Recommendation>,
}
