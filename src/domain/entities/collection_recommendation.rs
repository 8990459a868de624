//! Link between a collection and a recommendation.

use chrono::{DateTime, Utc};

/// Records that a recommendation is saved in a collection.
///
/// The `(collection_id, recommendation_id)` pair is unique, and both sides
/// always share the same owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRecommendation {
    pub collection_id: i64,
    pub recommendation_id: i64,
    pub created_at: DateTime<Utc>,
}

impl CollectionRecommendation {
    pub fn new(collection_id: i64, recommendation_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            collection_id,
            recommendation_id,
            created_at,
        }
    }
}
