//! Request extractors shared by API handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::utils::extract_user_id::extract_user_id_from_headers;

/// Identifier of the calling user, taken from the `user_id` header.
///
/// Rejects with `400 Bad Request` when the header is missing or not a
/// positive integer. Existence of the user is checked later by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub i64);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_user_id_from_headers(&parts.headers).map(CallerId)
    }
}
