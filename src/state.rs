//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::hooks::Hooks;
use crate::application::services::{
    Dispatch, LegacyFallback, RedirectResolver, RequestDispatcher, ShortlinkGenerator,
    ShortlinkSettings, TypeClassifier, UnknownFormatPolicy,
};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::path::match_short_path;

/// Services wired to one resource store and one hook registry.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<RequestDispatcher<dyn ResourceRepository>>,
    pub legacy: Arc<LegacyFallback<dyn ResourceRepository>>,
    pub shortlinks: Arc<ShortlinkGenerator<dyn ResourceRepository>>,
    pub repository: Arc<dyn ResourceRepository>,
    pub hooks: Arc<Hooks>,
}

impl AppState {
    /// Builds all services around `repository`.
    ///
    /// `hooks` is frozen here; nothing can be registered once requests are served.
    pub fn new(
        repository: Arc<dyn ResourceRepository>,
        hooks: Hooks,
        settings: ShortlinkSettings,
        policy: UnknownFormatPolicy,
    ) -> Self {
        let hooks = Arc::new(hooks);

        let resolver = RedirectResolver::new(repository.clone(), hooks.clone());
        let dispatcher = Arc::new(RequestDispatcher::new(resolver));
        let legacy = Arc::new(LegacyFallback::new(repository.clone(), hooks.clone()));

        let classifier = TypeClassifier::new(hooks.clone(), policy);
        let shortlinks = Arc::new(ShortlinkGenerator::new(
            repository.clone(),
            classifier,
            hooks.clone(),
            settings,
        ));

        Self {
            dispatcher,
            legacy,
            shortlinks,
            repository,
            hooks,
        }
    }

    /// Redirect target for a request path (leading slash included).
    ///
    /// Short paths go through the dispatcher; anything it leaves unresolved
    /// gets one try as a legacy ID.
    pub async fn redirect_target(&self, raw_path: &str) -> Result<Option<String>, AppError> {
        if let Some(path) = match_short_path(raw_path)
            && let Dispatch::Redirect(url) = self.dispatcher.dispatch(path).await?
        {
            return Ok(Some(url));
        }

        self.legacy.fallback(raw_path).await
    }
}
