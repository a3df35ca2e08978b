//! Repository trait for host resource lookups.

use crate::domain::entities::{Resource, ResourceId};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the host's resource store.
///
/// The shortener never writes resources; short codes are derived from IDs
/// the host already owns.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgResourceRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryResourceRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Loads a resource record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Resource))` if found
    /// - `Ok(None)` if no resource has this ID
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Resource>, AppError>;

    /// Resolves a resource ID to its canonical permalink.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn permalink(&self, id: ResourceId) -> Result<Option<String>, AppError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> bool;
}
