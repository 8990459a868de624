//! PostgreSQL implementation of the recommendation repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Recommendation;
use crate::domain::repositories::RecommendationRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
pub(crate) struct RecommendationRow {
    id: i64,
    user_id: i64,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<RecommendationRow> for Recommendation {
    fn from(r: RecommendationRow) -> Self {
        Recommendation::new(r.id, r.user_id, r.title, r.description, r.created_at)
    }
}

/// PostgreSQL repository for recommendation ownership checks.
pub struct PgRecommendationRepository {
    pool: Arc<PgPool>,
}

impl PgRecommendationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    async fn find_owned(
        &self,
        user_id: i64,
        recommendation_id: i64,
    ) -> Result<Option<Recommendation>, AppError> {
        let row = sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT id, user_id, title, description, created_at
            FROM recommendations
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(recommendation_id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Recommendation::from))
    }

    async fn shares_owner_with_collection(
        &self,
        recommendation_id: i64,
        collection_id: i64,
    ) -> Result<bool, AppError> {
        let shared: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM recommendations r
                JOIN collections c ON c.user_id = r.user_id
                WHERE r.id = $1 AND c.id = $2
            )
            "#,
        )
        .bind(recommendation_id)
        .bind(collection_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(shared)
    }
}
