//! API route configuration.
//!
//! Every endpoint identifies its caller through the `user_id` header,
//! see [`crate::api::extractors::CallerId`].

use crate::api::handlers::{
    add_recommendation_handler, create_collection_handler, delete_collection_handler,
    list_collections_handler, list_recommendations_handler, remove_recommendation_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Collection routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /collections`                                     - List the caller's collections
/// - `POST   /collections`                                     - Create a collection
/// - `DELETE /collections/{id}`                                - Delete a collection
/// - `GET    /collections/{id}/recommendations`                - Paginated recommendations
/// - `POST   /collections/{id}/recommendations`                - Save a recommendation
/// - `DELETE /collections/{id}/recommendations/{recommendationId}` - Remove a recommendation
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/collections",
            get(list_collections_handler).post(create_collection_handler),
        )
        .route("/collections/{id}", delete(delete_collection_handler))
        .route(
            "/collections/{id}/recommendations",
            get(list_recommendations_handler).post(add_recommendation_handler),
        )
        .route(
            "/collections/{id}/recommendations/{recommendation_id}",
            delete(remove_recommendation_handler),
        )
}
