//! Handlers for collection endpoints.
//!
//! Body and query rejections are captured rather than short-circuited by
//! axum, so an unknown caller is reported before a malformed request.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::collection::{
    AddRecommendationRequest, CollectionItem, CollectionRecommendationItem,
    CreateCollectionRequest, RecommendationPageResponse,
};
use crate::api::dto::pagination::PaginationParams;
use crate::api::extractors::CallerId;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's collections.
///
/// # Endpoint
///
/// `GET /api/collections`
///
/// # Errors
///
/// Returns 404 if the user does not exist or has no collections.
pub async fn list_collections_handler(
    CallerId(user_id): CallerId,
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectionItem>>, AppError> {
    let collections = state
        .collection_service
        .list_collections_for_user(user_id)
        .await?;

    Ok(Json(collections.into_iter().map(Into::into).collect()))
}

/// Creates a collection owned by the caller.
///
/// # Endpoint
///
/// `POST /api/collections`
///
/// # Request Body
///
/// ```json
/// { "name": "Weekend reads", "description": "optional, up to 500 chars" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 404 if the user does not exist.
/// Returns 409 if the caller already has a collection with this name.
pub async fn create_collection_handler(
    CallerId(user_id): CallerId,
    State(state): State<AppState>,
    payload: Result<Json<CreateCollectionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CollectionItem>), AppError> {
    let payload = match validated(payload) {
        Ok(payload) => payload,
        Err(e) => {
            state.collection_service.ensure_user_exists(user_id).await?;
            return Err(e);
        }
    };

    let collection = state
        .collection_service
        .create_collection(user_id, payload.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into())))
}

/// Saves one of the caller's recommendations into one of their collections.
///
/// # Endpoint
///
/// `POST /api/collections/{id}/recommendations`
///
/// # Request Body
///
/// ```json
/// { "recommendationId": 42 }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed.
/// Returns 404 if the user, collection or recommendation is missing or not owned by the caller.
/// Returns 409 if the recommendation is already in the collection.
/// Returns 403 if the recommendation and collection have different owners.
pub async fn add_recommendation_handler(
    CallerId(user_id): CallerId,
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<AddRecommendationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CollectionRecommendationItem>), AppError> {
    let Path(collection_id) = path?;
    let payload = match validated(payload) {
        Ok(payload) => payload,
        Err(e) => {
            state.collection_service.ensure_user_exists(user_id).await?;
            return Err(e);
        }
    };

    let link = state
        .collection_service
        .add_recommendation_to_collection(user_id, collection_id, payload.recommendation_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Removes a recommendation from a collection.
///
/// # Endpoint
///
/// `DELETE /api/collections/{id}/recommendations/{recommendationId}`
///
/// Succeeds with 204 even if the recommendation was not in the collection.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn remove_recommendation_handler(
    CallerId(user_id): CallerId,
    path: Result<Path<(i64, i64)>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path((collection_id, recommendation_id)) = path?;

    state
        .collection_service
        .remove_recommendation_from_collection(user_id, collection_id, recommendation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists the recommendations saved in a collection, one page at a time.
///
/// # Endpoint
///
/// `GET /api/collections/{id}/recommendations?page=1&limit=10`
///
/// `page` and `limit` default to 1 and 10; zero or non-numeric values
/// fall back to those defaults.
///
/// # Errors
///
/// Returns 404 if the user does not exist or does not own the collection.
pub async fn list_recommendations_handler(
    CallerId(user_id): CallerId,
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<RecommendationPageResponse>, AppError> {
    let Path(collection_id) = path?;
    let Query(params) = match params {
        Ok(params) => params,
        Err(e) => {
            state.collection_service.ensure_user_exists(user_id).await?;
            return Err(e.into());
        }
    };

    let page = state
        .collection_service
        .list_recommendations_for_collection(user_id, collection_id, params.into_page_request())
        .await?;

    Ok(Json(page.into()))
}

/// Deletes one of the caller's collections along with its saved recommendations.
///
/// # Endpoint
///
/// `DELETE /api/collections/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist or does not own the collection.
pub async fn delete_collection_handler(
    CallerId(user_id): CallerId,
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(collection_id) = path?;

    state
        .collection_service
        .delete_collection(user_id, collection_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    Ok(payload)
}
