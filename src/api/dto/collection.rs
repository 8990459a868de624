//! DTOs for collection endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{
    Collection, CollectionRecommendation, Recommendation, RecommendationPage,
};

/// Request body for `POST /api/collections`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters long."))]
    pub name: String,

    #[validate(length(max = 500, message = "Description can be up to 500 characters long."))]
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for `POST /api/collections/{id}/recommendations`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddRecommendationRequest {
    #[validate(range(min = 1, message = "Recommendation ID must be a positive integer."))]
    pub recommendation_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CollectionItem {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Collection> for CollectionItem {
    fn from(c: Collection) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
        }
    }
}

/// A recommendation saved in a collection.
#[derive(Debug, Serialize)]
pub struct CollectionRecommendationItem {
    pub collection_id: i64,
    pub recommendation_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CollectionRecommendation> for CollectionRecommendationItem {
    fn from(link: CollectionRecommendation) -> Self {
        Self {
            collection_id: link.collection_id,
            recommendation_id: link.recommendation_id,
            created_at: link.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Recommendation> for RecommendationItem {
    fn from(r: Recommendation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

/// Paginated listing of a collection's recommendations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPageResponse {
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
    pub total_recommendations: i64,
    pub recommendations: Vec<RecommendationItem>,
}

impl From<RecommendationPage> for RecommendationPageResponse {
    fn from(p: RecommendationPage) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            total_pages: p.total_pages,
            total_recommendations: p.total_recommendations,
            recommendations: p.recommendations.into_iter().map(Into::into).collect(),
        }
    }
}
