//! Recommendation entity.

use chrono::{DateTime, Utc};

/// An item owned by exactly one user that can be saved into that user's
/// collections.
///
/// Recommendations are created and maintained outside this service; here
/// they are only read for existence, ownership and listings.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Creates a new Recommendation instance.
    pub fn new(
        id: i64,
        user_id: i64,
        title: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            created_at,
        }
    }
}
