//! Ownership and existence guards.
//!
//! Each guard is a fresh read against storage that either passes or fails
//! with a specific [`AppError`] kind. Guards are composed explicitly by the
//! operations in [`super::collection_service`]; they never cache results
//! across calls.
//!
//! The name and link guards are advisory. Two concurrent requests can both
//! pass them before either writes, so the storage uniqueness constraints
//! remain the real enforcement and their violations are reported with the
//! same [`AppError::Conflict`] kind.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Collection, Recommendation};
use crate::domain::repositories::{
    CollectionRecommendationRepository, CollectionRepository, RecommendationRepository,
    UserRepository,
};
use crate::error::AppError;

/// Composable pre-condition checks for user-scoped operations.
#[derive(Clone)]
pub struct OwnershipGuards {
    users: Arc<dyn UserRepository>,
    collections: Arc<dyn CollectionRepository>,
    recommendations: Arc<dyn RecommendationRepository>,
    links: Arc<dyn CollectionRecommendationRepository>,
}

impl OwnershipGuards {
    pub fn new(
        users: Arc<dyn UserRepository>,
        collections: Arc<dyn CollectionRepository>,
        recommendations: Arc<dyn RecommendationRepository>,
        links: Arc<dyn CollectionRecommendationRepository>,
    ) -> Self {
        Self {
            users,
            collections,
            recommendations,
            links,
        }
    }

    /// Passes when a user with `user_id` exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn user_exists(&self, user_id: i64) -> Result<(), AppError> {
        if self.users.exists(user_id).await? {
            return Ok(());
        }

        debug!(user_id, "guard failed: user does not exist");
        Err(AppError::not_found(
            format!("User with ID {user_id} does not exist"),
            json!({ "user_id": user_id }),
        ))
    }

    /// Passes when the collection exists and belongs to `user_id`, returning it.
    ///
    /// A missing collection and a collection owned by someone else are
    /// indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] otherwise.
    pub async fn collection_owned_by(
        &self,
        user_id: i64,
        collection_id: i64,
    ) -> Result<Collection, AppError> {
        self.collections
            .find_owned(user_id, collection_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id, collection_id, "guard failed: collection not owned");
                AppError::not_found(
                    format!(
                        "Collection with ID {collection_id} does not belong to user with ID {user_id}"
                    ),
                    json!({ "user_id": user_id, "collection_id": collection_id }),
                )
            })
    }

    /// Passes when the recommendation exists and belongs to `user_id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] otherwise.
    pub async fn recommendation_owned_by(
        &self,
        user_id: i64,
        recommendation_id: i64,
    ) -> Result<Recommendation, AppError> {
        self.recommendations
            .find_owned(user_id, recommendation_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id, recommendation_id, "guard failed: recommendation not owned");
                AppError::not_found(
                    format!(
                        "Recommendation with ID {recommendation_id} does not belong to user with ID {user_id}"
                    ),
                    json!({ "user_id": user_id, "recommendation_id": recommendation_id }),
                )
            })
    }

    /// Passes when the recommendation is not yet linked to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the link already exists.
    pub async fn link_absent(
        &self,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<(), AppError> {
        if !self.links.exists(collection_id, recommendation_id).await? {
            return Ok(());
        }

        debug!(collection_id, recommendation_id, "guard failed: link exists");
        Err(AppError::conflict(
            format!("Recommendation with ID {recommendation_id} already exists in the collection"),
            json!({ "collection_id": collection_id, "recommendation_id": recommendation_id }),
        ))
    }

    /// Passes when `user_id` has no collection called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken.
    pub async fn name_available(&self, user_id: i64, name: &str) -> Result<(), AppError> {
        if !self.collections.name_exists(user_id, name).await? {
            return Ok(());
        }

        debug!(user_id, name, "guard failed: collection name taken");
        Err(AppError::conflict(
            format!("Collection with name \"{name}\" already exists for this user."),
            json!({ "user_id": user_id, "name": name }),
        ))
    }

    /// Runs the checks required before linking a recommendation, in order:
    /// collection ownership, recommendation ownership, link absence.
    ///
    /// Stops at the first failure, so existence errors always surface before
    /// the conflict check.
    ///
    /// # Errors
    ///
    /// Returns the first failing guard's error.
    pub async fn validate_collection_and_recommendation(
        &self,
        user_id: i64,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<(), AppError> {
        self.collection_owned_by(user_id, collection_id).await?;
        self.recommendation_owned_by(user_id, recommendation_id)
            .await?;
        self.link_absent(collection_id, recommendation_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockCollectionRecommendationRepository, MockCollectionRepository,
        MockRecommendationRepository, MockUserRepository,
    };
    use chrono::Utc;

    fn guards(
        users: MockUserRepository,
        collections: MockCollectionRepository,
        recommendations: MockRecommendationRepository,
        links: MockCollectionRecommendationRepository,
    ) -> OwnershipGuards {
        OwnershipGuards::new(
            Arc::new(users),
            Arc::new(collections),
            Arc::new(recommendations),
            Arc::new(links),
        )
    }

    fn collection(id: i64, user_id: i64) -> Collection {
        Collection::new(id, user_id, "Books".to_string(), None, Utc::now())
    }

    fn recommendation(id: i64, user_id: i64) -> Recommendation {
        Recommendation::new(id, user_id, "Dune".to_string(), None, Utc::now())
    }

    #[tokio::test]
    async fn test_user_exists_passes() {
        let mut users = MockUserRepository::new();
        users
            .expect_exists()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(true));

        let guards = guards(
            users,
            MockCollectionRepository::new(),
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        assert!(guards.user_exists(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_user_exists_fails_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_exists().times(1).returning(|_| Ok(false));

        let guards = guards(
            users,
            MockCollectionRepository::new(),
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        let err = guards.user_exists(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "User with ID 99 does not exist");
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_as_internal() {
        let mut users = MockUserRepository::new();
        users
            .expect_exists()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let guards = guards(
            users,
            MockCollectionRepository::new(),
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        let err = guards.user_exists(1).await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_collection_owned_by_returns_collection() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_find_owned()
            .withf(|user, id| *user == 1 && *id == 10)
            .times(1)
            .returning(|_, _| Ok(Some(collection(10, 1))));

        let guards = guards(
            MockUserRepository::new(),
            collections,
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        let found = guards.collection_owned_by(1, 10).await.unwrap();
        assert_eq!(found.id, 10);
    }

    #[tokio::test]
    async fn test_collection_owned_by_other_user_is_not_found() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(None));

        let guards = guards(
            MockUserRepository::new(),
            collections,
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        let err = guards.collection_owned_by(2, 10).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_name_available_conflict() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_name_exists()
            .withf(|user, name| *user == 1 && name == "Books")
            .times(1)
            .returning(|_, _| Ok(true));

        let guards = guards(
            MockUserRepository::new(),
            collections,
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        let err = guards.name_available(1, "Books").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_link_absent_conflict() {
        let mut links = MockCollectionRecommendationRepository::new();
        links.expect_exists().times(1).returning(|_, _| Ok(true));

        let guards = guards(
            MockUserRepository::new(),
            MockCollectionRepository::new(),
            MockRecommendationRepository::new(),
            links,
        );

        let err = guards.link_absent(10, 20).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_validate_all_pass() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(Some(collection(10, 1))));

        let mut recommendations = MockRecommendationRepository::new();
        recommendations
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(Some(recommendation(20, 1))));

        let mut links = MockCollectionRecommendationRepository::new();
        links.expect_exists().times(1).returning(|_, _| Ok(false));

        let guards = guards(MockUserRepository::new(), collections, recommendations, links);

        assert!(
            guards
                .validate_collection_and_recommendation(1, 10, 20)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_validate_stops_at_missing_collection() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(None));

        // No expectations: any call to these would panic.
        let guards = guards(
            MockUserRepository::new(),
            collections,
            MockRecommendationRepository::new(),
            MockCollectionRecommendationRepository::new(),
        );

        let err = guards
            .validate_collection_and_recommendation(1, 10, 20)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_validate_existence_error_before_conflict() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(Some(collection(10, 1))));

        let mut recommendations = MockRecommendationRepository::new();
        recommendations
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(None));

        let guards = guards(
            MockUserRepository::new(),
            collections,
            recommendations,
            MockCollectionRecommendationRepository::new(),
        );

        let err = guards
            .validate_collection_and_recommendation(1, 10, 20)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_validate_reports_existing_link() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(Some(collection(10, 1))));

        let mut recommendations = MockRecommendationRepository::new();
        recommendations
            .expect_find_owned()
            .times(1)
            .returning(|_, _| Ok(Some(recommendation(20, 1))));

        let mut links = MockCollectionRecommendationRepository::new();
        links.expect_exists().times(1).returning(|_, _| Ok(true));

        let guards = guards(MockUserRepository::new(), collections, recommendations, links);

        let err = guards
            .validate_collection_and_recommendation(1, 10, 20)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }
}
