//! Shortlink generation: the inverse of redirect resolution.

use std::sync::Arc;

use askama::Template;
use serde_json::json;
use tracing::warn;

use crate::application::hooks::Hooks;
use crate::application::services::classifier::{ClassifyError, TypeClassifier};
use crate::domain::entities::{Resource, ResourceId, ResourceRef};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::base60;
use crate::utils::path::{trailingslashit, untrailingslashit};

/// Where the shortlink base URL comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortlinkSettings {
    /// Environment-level override; when present the stored setting is ignored.
    pub base_override: Option<String>,
    /// The stored shortlink base setting.
    pub base_option: Option<String>,
    /// The host's own site URL, used when neither of the above is set.
    pub home_url: String,
}

/// What the current request is showing, for shortlinks in the "query" context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueriedObject {
    FrontPage,
    Singular(ResourceId),
    Other,
}

/// Which shortlink the host is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortlinkContext {
    /// The page being served by the current request.
    Query(QueriedObject),
    /// A specific resource.
    Post(ResourceRef),
}

/// Single-line feed markup advertising a shortlink.
#[derive(Template)]
#[template(source = r#"<atom:link rel="shortlink" href="{{ href }}" />"#, ext = "xml")]
struct ShortlinkTag<'a> {
    href: &'a str,
}

/// Builds `{base}/{type}/{base60 id}` shortlinks for resources.
pub struct ShortlinkGenerator<R: ResourceRepository + ?Sized> {
    repository: Arc<R>,
    classifier: TypeClassifier,
    hooks: Arc<Hooks>,
    settings: ShortlinkSettings,
}

impl<R: ResourceRepository + ?Sized> ShortlinkGenerator<R> {
    pub fn new(
        repository: Arc<R>,
        classifier: TypeClassifier,
        hooks: Arc<Hooks>,
        settings: ShortlinkSettings,
    ) -> Self {
        Self {
            repository,
            classifier,
            hooks,
            settings,
        }
    }

    /// Base URL for shortlinks, without a trailing `/`.
    ///
    /// Priority: override constant, then the stored setting (if non-empty),
    /// then the host's site URL. The result always runs through the
    /// `shortlink_base` hook.
    pub fn base_url(&self) -> String {
        let base = match &self.settings.base_override {
            Some(base) => untrailingslashit(base).to_string(),
            None => self
                .settings
                .base_option
                .clone()
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| self.settings.home_url.clone()),
        };

        untrailingslashit(&self.hooks.shortlink_base(base)).to_string()
    }

    /// Shortlink of the site root.
    pub fn front_page(&self) -> String {
        trailingslashit(&self.base_url())
    }

    /// Shortlink for an already loaded resource.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError`] if the classifier refuses the resource.
    pub fn shortlink_for(&self, resource: &Resource) -> Result<String, ClassifyError> {
        let prefix = self.classifier.classify(resource)?;
        Ok(format!(
            "{}/{}/{}",
            self.base_url(),
            prefix,
            base60::encode(resource.id)
        ))
    }

    /// Shortlink for a resource given by ID or record.
    ///
    /// Returns `None` for the `0` sentinel, unknown IDs, and resources the
    /// classifier rejects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if the resource store fails.
    pub async fn shortlink(&self, resource: ResourceRef) -> Result<Option<String>, AppError> {
        let resource = match resource {
            ResourceRef::ById(0) => return Ok(None),
            ResourceRef::ById(id) => match self.repository.find_by_id(id).await? {
                Some(resource) => resource,
                None => return Ok(None),
            },
            ResourceRef::ByRecord(resource) => resource,
        };

        if resource.id == 0 {
            return Ok(None);
        }

        match self.shortlink_for(&resource) {
            Ok(link) => Ok(Some(link)),
            Err(e) => {
                warn!(id = resource.id, error = %e, "no shortlink for unclassifiable resource");
                Ok(None)
            }
        }
    }

    /// Answers the host's "what is the shortlink here?" question.
    ///
    /// Falls back to `default_link` whenever no shortlink applies.
    pub async fn compute_shortlink(
        &self,
        default_link: Option<String>,
        context: ShortlinkContext,
    ) -> Result<Option<String>, AppError> {
        let computed = match context {
            ShortlinkContext::Query(QueriedObject::FrontPage) => Some(self.front_page()),
            ShortlinkContext::Query(QueriedObject::Singular(id)) => {
                self.shortlink(ResourceRef::ById(id)).await?
            }
            ShortlinkContext::Query(QueriedObject::Other) => None,
            ShortlinkContext::Post(resource) => self.shortlink(resource).await?,
        };

        Ok(computed.or(default_link))
    }

    /// Renders the feed markup line advertising `shortlink`.
    pub fn link_tag(&self, shortlink: &str) -> Result<String, AppError> {
        ShortlinkTag { href: shortlink }.render().map_err(|e| {
            AppError::internal("Failed to render shortlink tag", json!({ "reason": e.to_string() }))
        })
    }
}
