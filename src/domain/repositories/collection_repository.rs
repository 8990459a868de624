//! Repository trait for collection data access.

use crate::domain::entities::{Collection, NewCollection};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user-owned collections.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCollectionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_collection.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Creates a new collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the owner already has a collection
    /// with the same name. This is raised by the storage constraint, so it
    /// also covers inserts that race past an earlier name check.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_collection: NewCollection) -> Result<Collection, AppError>;

    /// Lists every collection owned by a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Collection>, AppError>;

    /// Finds a collection by id, but only if `user_id` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_owned(
        &self,
        user_id: i64,
        collection_id: i64,
    ) -> Result<Option<Collection>, AppError>;

    /// Returns whether the user already has a collection called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn name_exists(&self, user_id: i64, name: &str) -> Result<bool, AppError>;

    /// Deletes a collection together with its links.
    ///
    /// Deleting a collection that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, collection_id: i64) -> Result<(), AppError>;
}
