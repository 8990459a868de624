//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod collections;
pub mod health;

pub use collections::{
    add_recommendation_handler, create_collection_handler, delete_collection_handler,
    list_collections_handler, list_recommendations_handler, remove_recommendation_handler,
};
pub use health::health_handler;
