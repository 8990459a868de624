//! PostgreSQL implementation of the collection repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Collection, NewCollection};
use crate::domain::repositories::CollectionRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const NAME_CONSTRAINT: &str = "collections_user_id_name_key";

#[derive(sqlx::FromRow)]
struct CollectionRow {
    id: i64,
    user_id: i64,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CollectionRow> for Collection {
    fn from(r: CollectionRow) -> Self {
        Collection::new(r.id, r.user_id, r.name, r.description, r.created_at)
    }
}

/// PostgreSQL repository for collections.
///
/// Links are removed by the `ON DELETE CASCADE` foreign key on
/// `collection_recommendations`, so [`CollectionRepository::delete`] is a
/// single statement.
pub struct PgCollectionRepository {
    pool: Arc<PgPool>,
}

impl PgCollectionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PgCollectionRepository {
    async fn create(&self, new_collection: NewCollection) -> Result<Collection, AppError> {
        let row = sqlx::query_as::<_, CollectionRow>(
            r#"
            INSERT INTO collections (user_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, description, created_at
            "#,
        )
        .bind(new_collection.user_id)
        .bind(&new_collection.name)
        .bind(&new_collection.description)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, NAME_CONSTRAINT) {
                AppError::conflict(
                    format!(
                        "Collection with name \"{}\" already exists for this user.",
                        new_collection.name
                    ),
                    json!({ "user_id": new_collection.user_id, "name": new_collection.name }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Collection>, AppError> {
        let rows = sqlx::query_as::<_, CollectionRow>(
            r#"
            SELECT id, user_id, name, description, created_at
            FROM collections
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Collection::from).collect())
    }

    async fn find_owned(
        &self,
        user_id: i64,
        collection_id: i64,
    ) -> Result<Option<Collection>, AppError> {
        let row = sqlx::query_as::<_, CollectionRow>(
            r#"
            SELECT id, user_id, name, description, created_at
            FROM collections
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(collection_id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Collection::from))
    }

    async fn name_exists(&self, user_id: i64, name: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM collections WHERE user_id = $1 AND name = $2)",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn delete(&self, collection_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(collection_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
