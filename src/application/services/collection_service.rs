//! Collection use cases.
//!
//! Every operation takes the caller's user id, runs its guards in a fixed
//! order (stopping at the first failure) and then performs exactly one
//! storage effect.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use super::guards::OwnershipGuards;
use crate::domain::entities::{
    Collection, CollectionRecommendation, NewCollection, PageRequest, RecommendationPage,
};
use crate::domain::repositories::{
    CollectionRecommendationRepository, CollectionRepository, RecommendationRepository,
    UserRepository,
};
use crate::error::AppError;

/// Service for managing a user's collections and the recommendations saved in them.
pub struct CollectionService {
    guards: OwnershipGuards,
    collections: Arc<dyn CollectionRepository>,
    recommendations: Arc<dyn RecommendationRepository>,
    links: Arc<dyn CollectionRecommendationRepository>,
}

impl CollectionService {
    /// Creates a new collection service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        collections: Arc<dyn CollectionRepository>,
        recommendations: Arc<dyn RecommendationRepository>,
        links: Arc<dyn CollectionRecommendationRepository>,
    ) -> Self {
        let guards = OwnershipGuards::new(
            users,
            collections.clone(),
            recommendations.clone(),
            links.clone(),
        );

        Self {
            guards,
            collections,
            recommendations,
            links,
        }
    }

    /// Runs only the user-existence guard.
    ///
    /// Handlers call this before reporting a malformed request body so that
    /// an unknown caller is still reported as not found first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn ensure_user_exists(&self, user_id: i64) -> Result<(), AppError> {
        self.guards.user_exists(user_id).await
    }

    /// Lists every collection owned by the user.
    ///
    /// A user without collections is reported as not found rather than as an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or owns no collections.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_collections_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Collection>, AppError> {
        self.guards.user_exists(user_id).await?;

        let collections = self.collections.list_by_user(user_id).await?;
        if collections.is_empty() {
            return Err(AppError::not_found(
                format!("No collections found for user with ID {user_id}"),
                json!({ "user_id": user_id }),
            ));
        }

        Ok(collections)
    }

    /// Creates a collection for the user.
    ///
    /// # Guards
    ///
    /// 1. User exists
    /// 2. Name not yet used by this user
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the name is taken, whether the guard
    /// or the storage constraint catches it.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_collection(
        &self,
        user_id: i64,
        name: String,
        description: Option<String>,
    ) -> Result<Collection, AppError> {
        self.guards.user_exists(user_id).await?;
        self.guards.name_available(user_id, &name).await?;

        let created = self
            .collections
            .create(NewCollection {
                user_id,
                name,
                description,
            })
            .await?;

        info!(
            user_id,
            collection_id = created.id,
            "collection created"
        );
        Ok(created)
    }

    /// Saves a recommendation into a collection.
    ///
    /// # Guards
    ///
    /// 1. User exists
    /// 2. Collection exists and belongs to the user
    /// 3. Recommendation exists and belongs to the user
    /// 4. Link does not exist yet
    /// 5. Recommendation and collection share the same owner
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user, collection or recommendation is missing
    /// or owned by someone else.
    /// Returns [`AppError::Conflict`] if the recommendation is already in the collection.
    /// Returns [`AppError::Forbidden`] if the recommendation's owner differs from the
    /// collection's owner.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_recommendation_to_collection(
        &self,
        user_id: i64,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<CollectionRecommendation, AppError> {
        self.guards.user_exists(user_id).await?;
        self.guards
            .validate_collection_and_recommendation(user_id, collection_id, recommendation_id)
            .await?;

        if !self
            .recommendations
            .shares_owner_with_collection(recommendation_id, collection_id)
            .await?
        {
            return Err(AppError::forbidden(
                "Recommendation does not belong to this user or collection does not exist.",
                json!({
                    "collection_id": collection_id,
                    "recommendation_id": recommendation_id
                }),
            ));
        }

        let link = self.links.create(collection_id, recommendation_id).await?;

        info!(
            user_id,
            collection_id, recommendation_id, "recommendation added to collection"
        );
        Ok(link)
    }

    /// Removes a recommendation from a collection.
    ///
    /// Idempotent: removing a link that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_recommendation_from_collection(
        &self,
        user_id: i64,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<(), AppError> {
        self.guards.user_exists(user_id).await?;

        self.links.delete(collection_id, recommendation_id).await
    }

    /// Returns one page of the recommendations saved in a collection.
    ///
    /// The total count is accurate for any page; a page past the end yields
    /// an empty slice rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or does not own the collection.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_recommendations_for_collection(
        &self,
        user_id: i64,
        collection_id: i64,
        page: PageRequest,
    ) -> Result<RecommendationPage, AppError> {
        self.guards.user_exists(user_id).await?;
        self.guards
            .collection_owned_by(user_id, collection_id)
            .await?;

        let (total_recommendations, recommendations) = tokio::try_join!(
            self.links.count(collection_id),
            self.links.list_recommendations(
                collection_id,
                i64::from(page.limit()),
                page.offset()
            )
        )?;

        Ok(RecommendationPage {
            page: page.page(),
            limit: page.limit(),
            total_pages: page.total_pages(total_recommendations),
            total_recommendations,
            recommendations,
        })
    }

    /// Deletes a collection and its links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or does not own the collection.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_collection(&self, user_id: i64, collection_id: i64) -> Result<(), AppError> {
        self.guards.user_exists(user_id).await?;
        self.guards
            .collection_owned_by(user_id, collection_id)
            .await?;

        self.collections.delete(collection_id).await?;

        info!(user_id, collection_id, "collection deleted");
        Ok(())
    }
}
