//! PostgreSQL implementation of the collection/recommendation link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_recommendation_repository::RecommendationRow;
use crate::domain::entities::{CollectionRecommendation, Recommendation};
use crate::domain::repositories::CollectionRecommendationRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const LINK_CONSTRAINT: &str = "collection_recommendations_pkey";

#[derive(sqlx::FromRow)]
struct LinkRow {
    collection_id: i64,
    recommendation_id: i64,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for links and paginated collection listings.
pub struct PgCollectionRecommendationRepository {
    pool: Arc<PgPool>,
}

impl PgCollectionRecommendationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRecommendationRepository for PgCollectionRecommendationRepository {
    async fn create(
        &self,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<CollectionRecommendation, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO collection_recommendations (collection_id, recommendation_id)
            VALUES ($1, $2)
            RETURNING collection_id, recommendation_id, created_at
            "#,
        )
        .bind(collection_id)
        .bind(recommendation_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, LINK_CONSTRAINT) {
                AppError::conflict(
                    format!(
                        "Recommendation with ID {recommendation_id} already exists in the collection"
                    ),
                    json!({
                        "collection_id": collection_id,
                        "recommendation_id": recommendation_id
                    }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(CollectionRecommendation::new(
            row.collection_id,
            row.recommendation_id,
            row.created_at,
        ))
    }

    async fn exists(&self, collection_id: i64, recommendation_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM collection_recommendations
                WHERE collection_id = $1 AND recommendation_id = $2
            )
            "#,
        )
        .bind(collection_id)
        .bind(recommendation_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn delete(&self, collection_id: i64, recommendation_id: i64) -> Result<(), AppError> {
        sqlx::query(
            "DELETE FROM collection_recommendations WHERE collection_id = $1 AND recommendation_id = $2",
        )
        .bind(collection_id)
        .bind(recommendation_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn count(&self, collection_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM collection_recommendations WHERE collection_id = $1",
        )
        .bind(collection_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn list_recommendations(
        &self,
        collection_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Recommendation>, AppError> {
        let rows = sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT r.id, r.user_id, r.title, r.description, r.created_at
            FROM recommendations r
            JOIN collection_recommendations cr ON cr.recommendation_id = r.id
            WHERE cr.collection_id = $1
            ORDER BY cr.created_at, r.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(collection_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Recommendation::from).collect())
    }
}
