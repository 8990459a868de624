//! Repository trait for recommendation lookups.

use crate::domain::entities::Recommendation;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to recommendations.
///
/// Recommendations are managed elsewhere; this service only checks their
/// existence and ownership.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecommendationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Finds a recommendation by id, but only if `user_id` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_owned(
        &self,
        user_id: i64,
        recommendation_id: i64,
    ) -> Result<Option<Recommendation>, AppError>;

    /// Returns whether the recommendation belongs to the owner of the
    /// collection. False when either row is missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn shares_owner_with_collection(
        &self,
        recommendation_id: i64,
        collection_id: i64,
    ) -> Result<bool, AppError>;
}
