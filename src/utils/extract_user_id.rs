//! Caller identity extraction from HTTP request headers.

use crate::AppError;
use axum::http::HeaderMap;
use serde_json::json;

/// Header carrying the trusted caller identifier.
pub const USER_ID_HEADER: &str = "user_id";

/// Extracts the caller's user id from the `user_id` header.
///
/// The value is trusted as-is; authenticating it is the job of whatever sits
/// in front of this service.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The header is missing or empty
/// - The value is not valid UTF-8
/// - The value is not a positive integer
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("user_id", "42".parse().unwrap());
///
/// assert_eq!(extract_user_id_from_headers(&headers).unwrap(), 42);
/// ```
pub fn extract_user_id_from_headers(headers: &HeaderMap) -> Result<i64, AppError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| AppError::bad_request("User ID must be provided", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid User ID header", json!({})))?
        .trim();

    if raw.is_empty() {
        return Err(AppError::bad_request("User ID must be provided", json!({})));
    }

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            "User ID must be a positive integer",
            json!({ "user_id": [format!("Invalid value: {raw}")] }),
        )),
    }
}
