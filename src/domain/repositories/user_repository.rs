//! Repository trait for user lookups.

use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the externally managed `users` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns whether a user with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, user_id: i64) -> Result<bool, AppError>;
}
