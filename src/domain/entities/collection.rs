//! Collection entity.

use chrono::{DateTime, Utc};

/// A named grouping of recommendations owned by a single user.
///
/// `user_id` is fixed at creation. `name` is unique per owner; the storage
/// constraint `collections_user_id_name_key` is the source of truth for that.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    /// Creates a new Collection instance.
    pub fn new(
        id: i64,
        user_id: i64,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            created_at,
        }
    }

    /// Returns true if `user_id` owns this collection.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new collection.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCollection {
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
}
