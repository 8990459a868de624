//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! bound parameters. Unique-constraint violations surface as
//! [`crate::error::AppError::Conflict`]; every other storage failure becomes
//! [`crate::error::AppError::Internal`].
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User existence checks
//! - [`PgHealthRepository`] - Storage ping for the health endpoint
//! - [`PgCollectionRepository`] - Collection storage and ownership lookups
//! - [`PgRecommendationRepository`] - Recommendation ownership lookups
//! - [`PgCollectionRecommendationRepository`] - Links and paginated listings

pub mod pg_collection_recommendation_repository;
pub mod pg_collection_repository;
pub mod pg_health_repository;
pub mod pg_recommendation_repository;
pub mod pg_user_repository;

pub use pg_collection_recommendation_repository::PgCollectionRecommendationRepository;
pub use pg_collection_repository::PgCollectionRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_recommendation_repository::PgRecommendationRepository;
pub use pg_user_repository::PgUserRepository;
