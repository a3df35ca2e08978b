//! Redirect resolution for short paths.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::application::hooks::Hooks;
use crate::domain::entities::{ItemPath, ShortPath, TypePrefix};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::base60;
use crate::utils::path::trailingslashit;

/// `/i/` subtypes that name an Amazon product (ASIN or ISBN).
const AMAZON_SUBTYPES: [&str; 4] = ["a", "asin", "i", "isbn"];

/// Builds the Amazon product page URL for an ASIN/ISBN.
///
/// With an affiliate ID the link goes through Amazon's tracking redirect.
pub fn amazon_product_url(product_id: &str, affiliate_id: Option<&str>) -> String {
    match affiliate_id {
        Some(tag) => format!(
            "http://www.amazon.com/gp/redirect.html?ie=UTF8&location=\
             http%3A%2F%2Fwww.amazon.com%2Fdp%2F{product_id}&tag={tag}\
             &linkCode=ur2&camp=1789&creative=9325"
        ),
        None => format!("http://www.amazon.com/dp/{product_id}"),
    }
}

/// Turns a short path into a destination URL.
///
/// Strategies run in a fixed order and the first one to produce a URL wins:
///
/// 1. **Local content** - for local prefixes, decode the id and look up the
///    resource's permalink.
/// 2. **Redirect rule** - `redirect_base_{type}` base URL joined with the raw id.
/// 3. **Items** - for `/i/` paths, the ISBN/ASIN sub-resolver.
///
/// Whatever comes out (possibly nothing) then runs through the
/// `redirect_{type}` hook, which has the final word.
pub struct RedirectResolver<R: ResourceRepository + ?Sized> {
    repository: Arc<R>,
    hooks: Arc<Hooks>,
}

impl<R: ResourceRepository + ?Sized> RedirectResolver<R> {
    pub fn new(repository: Arc<R>, hooks: Arc<Hooks>) -> Self {
        Self { repository, hooks }
    }

    /// Resolves `path` to a destination URL, or `None` if nothing claims it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if the resource store fails.
    pub async fn resolve(&self, path: &ShortPath) -> Result<Option<String>, AppError> {
        let mut destination = self.resolve_local(path).await?;

        if destination.is_none() {
            destination = self.resolve_redirect_base(path);
        }

        if destination.is_none() && path.prefix == TypePrefix::ITEM {
            destination = self.resolve_item(path);
        }

        let destination = self.hooks.redirect(path, destination);
        match &destination {
            Some(url) => debug!(%path, destination = %url, "short path resolved"),
            None => debug!(%path, "short path unresolved"),
        }
        Ok(destination)
    }

    async fn resolve_local(&self, path: &ShortPath) -> Result<Option<String>, AppError> {
        if !self.hooks.is_local(path.prefix) {
            return Ok(None);
        }

        let id = base60::decode(path.id().unwrap_or_default());
        if id == 0 {
            trace!(%path, "short code decodes to the empty resource");
            return Ok(None);
        }

        let permalink = self
            .repository
            .permalink(id)
            .await?
            .filter(|url| !url.is_empty());
        trace!(%path, id, found = permalink.is_some(), "local lookup");
        Ok(permalink)
    }

    fn resolve_redirect_base(&self, path: &ShortPath) -> Option<String> {
        let base = self.hooks.redirect_base(path.prefix)?;
        Some(format!(
            "{}{}",
            trailingslashit(&base),
            path.id().unwrap_or_default()
        ))
    }

    /// Resolves the `{subtype}/{id}` tail of an `/i/` path.
    ///
    /// ASIN and ISBN subtypes go to Amazon; every subtype then runs through
    /// its `redirect_i_{subtype}` hook, so extensions can serve others.
    pub fn resolve_item(&self, path: &ShortPath) -> Option<String> {
        let item = ItemPath::parse(path.id());

        let destination = if AMAZON_SUBTYPES.contains(&item.subtype.as_str()) {
            let affiliate_id = self.hooks.affiliate_id();
            item.id()
                .filter(|id| !id.is_empty())
                .map(|id| amazon_product_url(id, affiliate_id.as_deref()))
        } else {
            None
        };

        self.hooks.redirect_item(&item, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockResourceRepository;
    use mockall::predicate::eq;

    fn path(raw: &str) -> ShortPath {
        ShortPath::parse(raw).unwrap()
    }

    fn resolver(
        repo: MockResourceRepository,
        hooks: Hooks,
    ) -> RedirectResolver<MockResourceRepository> {
        RedirectResolver::new(Arc::new(repo), Arc::new(hooks))
    }

    #[tokio::test]
    async fn test_local_resolution() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink()
            .with(eq(base60::decode("4c2")))
            .times(1)
            .returning(|_| Ok(Some("http://ex.am/2024/hello".to_string())));

        let result = resolver(repo, Hooks::new()).resolve(&path("b/4c2")).await.unwrap();
        assert_eq!(result.as_deref(), Some("http://ex.am/2024/hello"));
    }

    #[tokio::test]
    async fn test_lenient_code_reaches_same_resource() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink()
            .with(eq(61))
            .times(2)
            .returning(|_| Ok(Some("http://ex.am/?p=61".to_string())));

        let r = resolver(repo, Hooks::new());
        assert_eq!(
            r.resolve(&path("t/11")).await.unwrap(),
            r.resolve(&path("t/lI")).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_local_wins_over_redirect_rule() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink()
            .returning(|_| Ok(Some("http://ex.am/local".to_string())));

        let hooks = Hooks::new().add_redirect_rule(TypePrefix::BLOG, "http://elsewhere.example/");
        let result = resolver(repo, hooks).resolve(&path("b/4c2")).await.unwrap();
        assert_eq!(result.as_deref(), Some("http://ex.am/local"));
    }

    #[tokio::test]
    async fn test_local_miss_falls_through_to_rule() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink().returning(|_| Ok(None));

        let hooks = Hooks::new().add_redirect_rule(TypePrefix::BLOG, "http://archive.example");
        let result = resolver(repo, hooks).resolve(&path("b/zz")).await.unwrap();
        assert_eq!(result.as_deref(), Some("http://archive.example/zz"));
    }

    #[tokio::test]
    async fn test_redirect_rule_for_external_type() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink().never();

        let wiki = TypePrefix::new('w').unwrap();
        let hooks = Hooks::new().add_redirect_rule(wiki, "http://wiki.example.com/");
        let r = resolver(repo, hooks);

        assert_eq!(
            r.resolve(&path("w/FrontPage")).await.unwrap().as_deref(),
            Some("http://wiki.example.com/FrontPage")
        );
        assert_eq!(
            r.resolve(&path("w")).await.unwrap().as_deref(),
            Some("http://wiki.example.com/")
        );
    }

    #[tokio::test]
    async fn test_absent_id_skips_lookup() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink().never();

        let r = resolver(repo, Hooks::new());
        assert_eq!(r.resolve(&path("b")).await.unwrap(), None);
        assert_eq!(r.resolve(&path("b/")).await.unwrap(), None);
        assert_eq!(r.resolve(&path("b/!!")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_type_unresolved() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink().never();

        let result = resolver(repo, Hooks::new()).resolve(&path("z/unknown")).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_type_hook_can_supply_destination() {
        let repo = MockResourceRepository::new();
        let zed = TypePrefix::new('z').unwrap();
        let hooks = Hooks::new().on_redirect(zed, |destination, path| {
            destination.or_else(|| path.id().map(|id| format!("https://z.example/{id}")))
        });

        let result = resolver(repo, hooks).resolve(&path("z/42")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://z.example/42"));
    }

    #[tokio::test]
    async fn test_type_hook_can_override_local() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink()
            .returning(|_| Ok(Some("http://ex.am/local".to_string())));
        let hooks = Hooks::new().on_redirect(TypePrefix::BLOG, |_, _| None);

        let result = resolver(repo, hooks).resolve(&path("b/4c2")).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockResourceRepository::new();
        repo.expect_permalink()
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let result = resolver(repo, Hooks::new()).resolve(&path("b/4c2")).await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_item_isbn_without_affiliate() {
        let r = resolver(MockResourceRepository::new(), Hooks::new());
        let result = r.resolve(&path("i/isbn/0136091814")).await.unwrap();
        assert_eq!(result.as_deref(), Some("http://www.amazon.com/dp/0136091814"));
    }

    #[tokio::test]
    async fn test_item_asin_with_affiliate() {
        let hooks = Hooks::new().with_affiliate_id("xyz-20");
        let r = resolver(MockResourceRepository::new(), hooks);

        let result = r.resolve(&path("i/a/B000FC1PJI")).await.unwrap().unwrap();
        assert!(result.starts_with("http://www.amazon.com/gp/redirect.html?"));
        assert!(result.contains("http%3A%2F%2Fwww.amazon.com%2Fdp%2FB000FC1PJI"));
        assert!(result.contains("tag=xyz-20"));
    }

    #[tokio::test]
    async fn test_item_unknown_or_incomplete() {
        let r = resolver(MockResourceRepository::new(), Hooks::new());
        assert_eq!(r.resolve(&path("i/imdb/tt0062622")).await.unwrap(), None);
        assert_eq!(r.resolve(&path("i/isbn")).await.unwrap(), None);
        assert_eq!(r.resolve(&path("i/isbn/")).await.unwrap(), None);
        assert_eq!(r.resolve(&path("i")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_item_subtype_hook() {
        let hooks = Hooks::new().on_redirect_item("imdb", |destination, item| {
            destination.or_else(|| item.id().map(|id| format!("https://www.imdb.com/title/{id}/")))
        });
        let r = resolver(MockResourceRepository::new(), hooks);

        let result = r.resolve(&path("i/imdb/tt0062622")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://www.imdb.com/title/tt0062622/"));
    }

    #[test]
    fn test_amazon_product_url() {
        assert_eq!(
            amazon_product_url("0136091814", None),
            "http://www.amazon.com/dp/0136091814"
        );
        assert_eq!(
            amazon_product_url("0136091814", Some("xyz-20")),
            "http://www.amazon.com/gp/redirect.html?ie=UTF8&location=\
             http%3A%2F%2Fwww.amazon.com%2Fdp%2F0136091814&tag=xyz-20\
             &linkCode=ur2&camp=1789&creative=9325"
        );
    }
}
