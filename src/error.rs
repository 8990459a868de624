//! Application error taxonomy and its HTTP representation.
//!
//! Every guard, use-case operation and repository returns [`AppError`]. The
//! HTTP boundary turns it into a status code and a JSON envelope:
//!
//! ```json
//! { "status": "error", "message": "...", "errors": { "name": ["..."] } }
//! ```
//!
//! `errors` is only present for validation failures. Raw storage diagnostics
//! are logged, never returned to the caller.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Structurally malformed input (missing or wrong-typed field).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// A referenced user, collection or recommendation does not exist,
    /// or a listing that must not be empty has no rows.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Duplicate collection name or duplicate link.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// The recommendation does not belong to the collection's owner.
    #[error("{message}")]
    Forbidden { message: String, details: Value },
    /// Unexpected storage or infrastructure failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, errors) = match self {
            AppError::Validation { message, details } => {
                let errors = match details {
                    Value::Null => None,
                    Value::Object(ref map) if map.is_empty() => None,
                    other => Some(other),
                };
                (message, errors)
            }
            AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Forbidden { message, .. }
            | AppError::Internal { message, .. } => (message, None),
        };

        let body = ErrorBody {
            status: "error",
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<Value> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| Value::String(m.to_string()))
                        .unwrap_or_else(|| Value::String(e.code.to_string()))
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(messages));
        }

        AppError::bad_request("Validation failed", Value::Object(fields))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Validation failed",
            json!({ "body": [rejection.body_text()] }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "path": [rejection.body_text()] }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameter",
            json!({ "query": [rejection.body_text()] }),
        )
    }
}
