#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use axum_test::{TestRequest, TestServer};
use chrono::Utc;
use collections_api::api::handlers::health_handler;
use collections_api::api::routes::collection_routes;
use collections_api::application::services::CollectionService;
use collections_api::domain::entities::{
    Collection, CollectionRecommendation, NewCollection, Recommendation,
};
use collections_api::domain::repositories::{
    CollectionRecommendationRepository, CollectionRepository, HealthRepository,
    RecommendationRepository, UserRepository,
};
use collections_api::error::AppError;
use collections_api::state::AppState;
use serde_json::json;

#[derive(Default)]
struct Tables {
    users: Vec<i64>,
    recommendations: Vec<Recommendation>,
    collections: Vec<Collection>,
    links: Vec<CollectionRecommendation>,
    next_collection_id: i64,
}

/// In-memory stand-in for the PostgreSQL schema.
///
/// Mirrors the constraints the handlers rely on: unique collection names per
/// user, unique links and cascade of links when a collection is deleted.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn add_user(&self, user_id: i64) {
        self.tables().users.push(user_id);
    }

    pub fn add_recommendation(&self, id: i64, user_id: i64, title: &str) {
        self.tables().recommendations.push(Recommendation::new(
            id,
            user_id,
            title.to_string(),
            None,
            Utc::now(),
        ));
    }

    /// Makes every subsequent `ping` fail.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn collection_count(&self) -> usize {
        self.tables().collections.len()
    }

    pub fn link_count(&self) -> usize {
        self.tables().links.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn exists(&self, user_id: i64) -> Result<bool, AppError> {
        Ok(self.tables().users.contains(&user_id))
    }
}

#[async_trait]
impl HealthRepository for InMemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionRepository for InMemoryStore {
    async fn create(&self, new_collection: NewCollection) -> Result<Collection, AppError> {
        let mut tables = self.tables();

        if tables
            .collections
            .iter()
            .any(|c| c.user_id == new_collection.user_id && c.name == new_collection.name)
        {
            return Err(AppError::conflict(
                format!(
                    "Collection with name \"{}\" already exists for this user.",
                    new_collection.name
                ),
                json!({}),
            ));
        }

        tables.next_collection_id += 1;
        let collection = Collection::new(
            tables.next_collection_id,
            new_collection.user_id,
            new_collection.name,
            new_collection.description,
            Utc::now(),
        );
        tables.collections.push(collection.clone());

        Ok(collection)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Collection>, AppError> {
        Ok(self
            .tables()
            .collections
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_owned(
        &self,
        user_id: i64,
        collection_id: i64,
    ) -> Result<Option<Collection>, AppError> {
        Ok(self
            .tables()
            .collections
            .iter()
            .find(|c| c.id == collection_id && c.user_id == user_id)
            .cloned())
    }

    async fn name_exists(&self, user_id: i64, name: &str) -> Result<bool, AppError> {
        Ok(self
            .tables()
            .collections
            .iter()
            .any(|c| c.user_id == user_id && c.name == name))
    }

    async fn delete(&self, collection_id: i64) -> Result<(), AppError> {
        let mut tables = self.tables();
        tables.collections.retain(|c| c.id != collection_id);
        tables.links.retain(|l| l.collection_id != collection_id);
        Ok(())
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryStore {
    async fn find_owned(
        &self,
        user_id: i64,
        recommendation_id: i64,
    ) -> Result<Option<Recommendation>, AppError> {
        Ok(self
            .tables()
            .recommendations
            .iter()
            .find(|r| r.id == recommendation_id && r.user_id == user_id)
            .cloned())
    }

    async fn shares_owner_with_collection(
        &self,
        recommendation_id: i64,
        collection_id: i64,
    ) -> Result<bool, AppError> {
        let tables = self.tables();
        let recommendation_owner = tables
            .recommendations
            .iter()
            .find(|r| r.id == recommendation_id)
            .map(|r| r.user_id);
        let collection_owner = tables
            .collections
            .iter()
            .find(|c| c.id == collection_id)
            .map(|c| c.user_id);

        Ok(recommendation_owner.is_some() && recommendation_owner == collection_owner)
    }
}

#[async_trait]
impl CollectionRecommendationRepository for InMemoryStore {
    async fn create(
        &self,
        collection_id: i64,
        recommendation_id: i64,
    ) -> Result<CollectionRecommendation, AppError> {
        let mut tables = self.tables();

        if tables
            .links
            .iter()
            .any(|l| l.collection_id == collection_id && l.recommendation_id == recommendation_id)
        {
            return Err(AppError::conflict(
                format!("Recommendation with ID {recommendation_id} already exists in the collection"),
                json!({}),
            ));
        }

        let link = CollectionRecommendation::new(collection_id, recommendation_id, Utc::now());
        tables.links.push(link.clone());

        Ok(link)
    }

    async fn exists(&self, collection_id: i64, recommendation_id: i64) -> Result<bool, AppError> {
        Ok(self
            .tables()
            .links
            .iter()
            .any(|l| l.collection_id == collection_id && l.recommendation_id == recommendation_id))
    }

    async fn delete(&self, collection_id: i64, recommendation_id: i64) -> Result<(), AppError> {
        self.tables().links.retain(|l| {
            !(l.collection_id == collection_id && l.recommendation_id == recommendation_id)
        });
        Ok(())
    }

    async fn count(&self, collection_id: i64) -> Result<i64, AppError> {
        let count = self
            .tables()
            .links
            .iter()
            .filter(|l| l.collection_id == collection_id)
            .count();
        Ok(count as i64)
    }

    async fn list_recommendations(
        &self,
        collection_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Recommendation>, AppError> {
        let tables = self.tables();

        Ok(tables
            .links
            .iter()
            .filter(|l| l.collection_id == collection_id)
            .skip(offset as usize)
            .take(limit as usize)
            .filter_map(|l| {
                tables
                    .recommendations
                    .iter()
                    .find(|r| r.id == l.recommendation_id)
                    .cloned()
            })
            .collect())
    }
}

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    let service = CollectionService::new(store.clone(), store.clone(), store.clone(), store.clone());
    AppState::new(Arc::new(service), store)
}

pub fn make_server(store: Arc<InMemoryStore>) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", collection_routes())
        .with_state(create_test_state(store));
    TestServer::new(app).unwrap()
}

pub fn as_user(request: TestRequest, user_id: i64) -> TestRequest {
    request.add_header(
        HeaderName::from_static("user_id"),
        HeaderValue::from_str(&user_id.to_string()).unwrap(),
    )
}

pub async fn insert_user(pool: &sqlx::PgPool) -> i64 {
    sqlx::query_scalar("INSERT INTO users DEFAULT VALUES RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_recommendation(pool: &sqlx::PgPool, user_id: i64, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO recommendations (user_id, title) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}
