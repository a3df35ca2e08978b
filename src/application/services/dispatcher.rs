//! Entry point for requests the host routed to the shortener.

use tracing::{debug, info};

use crate::application::services::resolver::RedirectResolver;
use crate::domain::entities::ShortPath;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::path::strip_trailing_punctuation;

/// Outcome of dispatching a short path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Permanently redirect to this URL and stop processing the request.
    Redirect(String),
    /// Nothing claimed the path; the host decides what a 404 looks like.
    NotFound,
}

/// Parses a raw short path and drives the [`RedirectResolver`].
///
/// If the first attempt finds nothing, trailing `.`, `,` and `)` are stripped
/// from the id and the resolver is tried once more: short links are often
/// copied out of prose with punctuation stuck to the end.
pub struct RequestDispatcher<R: ResourceRepository + ?Sized> {
    resolver: RedirectResolver<R>,
}

impl<R: ResourceRepository + ?Sized> RequestDispatcher<R> {
    pub fn new(resolver: RedirectResolver<R>) -> Self {
        Self { resolver }
    }

    /// Dispatches `raw_path` (`{type}/{id}`, no leading slash).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if the resource store fails.
    pub async fn dispatch(&self, raw_path: &str) -> Result<Dispatch, AppError> {
        let Some(path) = ShortPath::parse(raw_path) else {
            debug!(raw_path, "not a short path");
            return Ok(Dispatch::NotFound);
        };

        if let Some(destination) = self.resolver.resolve(&path).await? {
            info!(%path, %destination, "redirecting short path");
            return Ok(Dispatch::Redirect(destination));
        }

        if let Some(id) = path.id() {
            let clean_id = strip_trailing_punctuation(id);
            if clean_id != id {
                let retry = path.with_id(clean_id);
                if let Some(destination) = self.resolver.resolve(&retry).await? {
                    info!(
                        %path,
                        %destination,
                        "redirecting short path after stripping punctuation"
                    );
                    return Ok(Dispatch::Redirect(destination));
                }
            }
        }

        debug!(%path, "short path not found");
        Ok(Dispatch::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::hooks::Hooks;
    use crate::domain::entities::TypePrefix;
    use crate::domain::repositories::MockResourceRepository;
    use crate::utils::base60;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn dispatcher(
        repo: MockResourceRepository,
        hooks: Hooks,
    ) -> RequestDispatcher<MockResourceRepository> {
        RequestDispatcher::new(RedirectResolver::new(Arc::new(repo), Arc::new(hooks)))
    }

    fn repo_with(id: u64, url: &'static str) -> MockResourceRepository {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink()
            .with(eq(id))
            .returning(move |_| Ok(Some(url.to_string())));
        repo.expect_permalink().returning(|_| Ok(None));
        repo
    }

    #[tokio::test]
    async fn test_dispatch_local() {
        let d = dispatcher(repo_with(base60::decode("4c2"), "http://ex.am/post"), Hooks::new());
        assert_eq!(
            d.dispatch("b/4c2").await.unwrap(),
            Dispatch::Redirect("http://ex.am/post".to_string())
        );
    }

    #[tokio::test]
    async fn test_trailing_punctuation_retry() {
        let d = dispatcher(repo_with(base60::decode("4c2"), "http://ex.am/post"), Hooks::new());

        let direct = d.dispatch("b/4c2").await.unwrap();
        for raw in ["b/4c2)", "b/4c2.", "b/4c2),", "b/4c2..."] {
            assert_eq!(d.dispatch(raw).await.unwrap(), direct, "{raw}");
        }
    }

    #[tokio::test]
    async fn test_no_retry_without_punctuation() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink().times(1).returning(|_| Ok(None));

        let d = dispatcher(repo, Hooks::new());
        assert_eq!(d.dispatch("b/zz").await.unwrap(), Dispatch::NotFound);
    }

    #[tokio::test]
    async fn test_retry_happens_once() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink().times(2).returning(|_| Ok(None));

        let d = dispatcher(repo, Hooks::new());
        assert_eq!(d.dispatch("b/zz).").await.unwrap(), Dispatch::NotFound);
    }

    #[tokio::test]
    async fn test_punctuation_retry_for_redirect_rules() {
        // Rules see the raw id, so only a hook that rejects punctuation forces the retry.
        let wiki = TypePrefix::new('w').unwrap();
        let hooks = Hooks::new().on_redirect(wiki, |destination, path| {
            match path.id() {
                Some(id) if id.ends_with(')') => None,
                Some(id) => destination.or_else(|| Some(format!("http://wiki.example/{id}"))),
                None => destination,
            }
        });

        let d = dispatcher(MockResourceRepository::new(), hooks);
        assert_eq!(
            d.dispatch("w/Home)").await.unwrap(),
            Dispatch::Redirect("http://wiki.example/Home".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_type_not_found() {
        let d = dispatcher(MockResourceRepository::new(), Hooks::new());
        assert_eq!(d.dispatch("z/unknown").await.unwrap(), Dispatch::NotFound);
    }

    #[tokio::test]
    async fn test_missing_id_not_found() {
        let d = dispatcher(MockResourceRepository::new(), Hooks::new());
        assert_eq!(d.dispatch("b").await.unwrap(), Dispatch::NotFound);
    }

    #[tokio::test]
    async fn test_not_a_short_path() {
        let d = dispatcher(MockResourceRepository::new(), Hooks::new());
        assert_eq!(d.dispatch("").await.unwrap(), Dispatch::NotFound);
        assert_eq!(d.dispatch("Bad/1").await.unwrap(), Dispatch::NotFound);
    }

    #[tokio::test]
    async fn test_item_dispatch() {
        let d = dispatcher(MockResourceRepository::new(), Hooks::new());
        assert_eq!(
            d.dispatch("i/isbn/0136091814").await.unwrap(),
            Dispatch::Redirect("http://www.amazon.com/dp/0136091814".to_string())
        );

        let affiliate = dispatcher(
            MockResourceRepository::new(),
            Hooks::new().with_affiliate_id("xyz-20"),
        );
        match affiliate.dispatch("i/isbn/0136091814").await.unwrap() {
            Dispatch::Redirect(url) => assert!(url.contains("tag=xyz-20")),
            other => panic!("expected redirect, got {other:?}"),
        }
    }
}
