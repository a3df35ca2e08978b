//! Redirects for identifiers from the previous short URL scheme.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::hooks::Hooks;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::legacy_id::parse_legacy_id;

/// Last chance for a request the host has already decided is a 404.
///
/// The raw path is read as a legacy ID (decimal or base 32 by default, see
/// [`parse_legacy_id`]), then passed through the `legacy_id` hook. If the ID
/// names a resource, its permalink (through the `legacy_redirect` hook) is
/// the redirect target.
pub struct LegacyFallback<R: ResourceRepository + ?Sized> {
    repository: Arc<R>,
    hooks: Arc<Hooks>,
}

impl<R: ResourceRepository + ?Sized> LegacyFallback<R> {
    pub fn new(repository: Arc<R>, hooks: Arc<Hooks>) -> Self {
        Self { repository, hooks }
    }

    /// Returns the redirect target for `raw_path`, or `None` to leave the 404 alone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if the resource store fails.
    pub async fn fallback(&self, raw_path: &str) -> Result<Option<String>, AppError> {
        let path = raw_path.trim_start_matches('/');

        let Some(id) = self
            .hooks
            .legacy_id(parse_legacy_id(path), path)
            .filter(|id| *id != 0)
        else {
            debug!(path, "no legacy id in path");
            return Ok(None);
        };

        let Some(resource) = self.repository.find_by_id(id).await? else {
            debug!(path, id, "legacy id does not name a resource");
            return Ok(None);
        };

        if resource.permalink.is_empty() {
            return Ok(None);
        }

        let url = self.hooks.legacy_redirect(resource.permalink.clone(), &resource);
        info!(path, id, destination = %url, "redirecting legacy id");
        Ok(Some(url))
    }
}
