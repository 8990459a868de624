//! Repository trait for storage liveness checks.

use crate::error::AppError;
use async_trait::async_trait;

/// Reachability check used by the health endpoint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHealthRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Issues a trivial round trip to storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
