//! Type prefix classification for resources.

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::application::hooks::Hooks;
use crate::domain::entities::{Resource, ResourceId, TypePrefix};

/// What to do with a resource whose format or media type is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFormatPolicy {
    /// Classify it as a blog post (`b`).
    #[default]
    Default,
    /// Refuse to classify it unless a `type_prefix` hook claims it.
    Reject,
}

impl FromStr for UnknownFormatPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown format policy '{other}', expected 'default' or 'reject'"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("resource {id} has unrecognized content format '{format}'")]
    UnknownFormat { id: ResourceId, format: String },
    #[error("attachment {id} has unrecognized media type '{media_kind}'")]
    UnknownMediaType { id: ResourceId, media_kind: String },
}

/// Maps resources to their short path namespace.
///
/// Attachments are classified by the coarse kind of their MIME type, other
/// resources by content format. The built-in result then runs through the
/// `type_prefix` hook.
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    hooks: Arc<Hooks>,
    policy: UnknownFormatPolicy,
}

impl TypeClassifier {
    pub fn new(hooks: Arc<Hooks>, policy: UnknownFormatPolicy) -> Self {
        Self { hooks, policy }
    }

    /// Returns the type prefix for `resource`.
    ///
    /// # Errors
    ///
    /// Under [`UnknownFormatPolicy::Reject`], returns [`ClassifyError`] when
    /// neither the built-in table nor a `type_prefix` hook recognizes the
    /// resource. Resources without a format or MIME type are always `b`.
    pub fn classify(&self, resource: &Resource) -> Result<TypePrefix, ClassifyError> {
        let builtin = if resource.is_attachment() {
            match resource.media_kind() {
                None => Ok(TypePrefix::BLOG),
                Some(kind) => prefix_for_media_kind(kind).ok_or_else(|| {
                    ClassifyError::UnknownMediaType {
                        id: resource.id,
                        media_kind: kind.to_string(),
                    }
                }),
            }
        } else {
            match resource.format.as_deref() {
                None | Some("") => Ok(TypePrefix::BLOG),
                Some(format) => {
                    prefix_for_format(format).ok_or_else(|| ClassifyError::UnknownFormat {
                        id: resource.id,
                        format: format.to_string(),
                    })
                }
            }
        };

        match builtin {
            Ok(prefix) => Ok(self.hooks.type_prefix(prefix, resource)),
            Err(unknown) => {
                let prefix = self.hooks.type_prefix(TypePrefix::BLOG, resource);
                if self.policy == UnknownFormatPolicy::Reject && prefix == TypePrefix::BLOG {
                    return Err(unknown);
                }
                debug!(id = resource.id, %prefix, "unrecognized resource classified by fallback");
                Ok(prefix)
            }
        }
    }
}

fn prefix_for_media_kind(kind: &str) -> Option<TypePrefix> {
    match kind {
        "audio" | "video" => Some(TypePrefix::MEDIA),
        "image" => Some(TypePrefix::PHOTO),
        _ => None,
    }
}

fn prefix_for_format(format: &str) -> Option<TypePrefix> {
    match format {
        "standard" => Some(TypePrefix::BLOG),
        "aside" | "status" | "link" => Some(TypePrefix::SHORT),
        "audio" | "video" => Some(TypePrefix::MEDIA),
        "photo" | "gallery" | "image" => Some(TypePrefix::PHOTO),
        _ => None,
    }
}
