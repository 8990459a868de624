//! Repository trait for collection/recommendation links.

use crate::domain::entities::{CollectionRecommendation, Recommendation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `collection_recommendations` link table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCollectionRecommendationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_collection.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRecommendationRepository: Send + Sync {
    /// Links a recommendation into a collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the link already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<CollectionRecommendation, AppError>;

    /// Returns whether the pair is already linked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, collection_id: i64, recommendation_id: i64) -> Result<bool, AppError>;

    /// Removes a link. Removing a link that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, collection_id: i64, recommendation_id: i64) -> Result<(), AppError>;

    /// Counts every recommendation linked to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, collection_id: i64) -> Result<i64, AppError>;

    /// Returns one slice of the collection's recommendations.
    ///
    /// Rows come back in link insertion order, then by recommendation id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recommendations(
        &self,
        collection_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Recommendation>, AppError>;
}
