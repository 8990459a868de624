//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::CollectionService;
use crate::domain::repositories::HealthRepository;
use crate::infrastructure::persistence::{
    PgCollectionRecommendationRepository, PgCollectionRepository, PgHealthRepository,
    PgRecommendationRepository, PgUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub collection_service: Arc<CollectionService>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(
        collection_service: Arc<CollectionService>,
        health: Arc<dyn HealthRepository>,
    ) -> Self {
        Self {
            collection_service,
            health,
        }
    }

    /// Wires the PostgreSQL repositories into the collection service.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        let service = CollectionService::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgCollectionRepository::new(pool.clone())),
            Arc::new(PgRecommendationRepository::new(pool.clone())),
            Arc::new(PgCollectionRecommendationRepository::new(pool.clone())),
        );

        Self::new(Arc::new(service), Arc::new(PgHealthRepository::new(pool)))
    }
}
