//! Business logic services for the application layer.

pub mod collection_service;
pub mod guards;

pub use collection_service::CollectionService;
pub use guards::OwnershipGuards;
