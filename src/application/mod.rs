//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::collection_service::CollectionService`] - Collection and link use cases
//! - [`services::guards::OwnershipGuards`] - Existence, ownership and uniqueness checks

pub mod services;
