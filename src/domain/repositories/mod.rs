//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the PostgreSQL repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User existence checks
//! - [`HealthRepository`] - Storage liveness for the health endpoint
//! - [`CollectionRepository`] - Collection CRUD operations
//! - [`RecommendationRepository`] - Recommendation ownership checks
//! - [`CollectionRecommendationRepository`] - Links and paginated listings
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod collection_recommendation_repository;
pub mod collection_repository;
pub mod health_repository;
pub mod recommendation_repository;
pub mod user_repository;

pub use collection_recommendation_repository::CollectionRecommendationRepository;
pub use collection_repository::CollectionRepository;
pub use health_repository::HealthRepository;
pub use recommendation_repository::RecommendationRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use collection_recommendation_repository::MockCollectionRecommendationRepository;
#[cfg(test)]
pub use collection_repository::MockCollectionRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use recommendation_repository::MockRecommendationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
