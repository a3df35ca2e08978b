//! Resource entity: a host-managed post, page or attachment.

use std::fmt;

/// Identifier of a host-managed resource.
///
/// `0` is the "no resource" sentinel (it is also what the front page and an
/// empty short code map to) and never resolves to content.
pub type ResourceId = u64;

/// Host content type of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Post,
    Page,
    Attachment,
    Other(String),
}

impl ResourceKind {
    /// Returns the host's name for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Attachment => "attachment",
            Self::Other(kind) => kind,
        }
    }
}

impl From<&str> for ResourceKind {
    fn from(value: &str) -> Self {
        match value {
            "post" => Self::Post,
            "page" => Self::Page,
            "attachment" => Self::Attachment,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource record as returned by the resource store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: ResourceId,
    pub kind: ResourceKind,
    /// Content format (`aside`, `status`, `photo`, ...). `None` for standard posts.
    pub format: Option<String>,
    /// MIME type, meaningful for attachments.
    pub mime_type: Option<String>,
    /// Canonical long-form URL.
    pub permalink: String,
}

impl Resource {
    /// Creates a standard resource without format or MIME type.
    pub fn new(id: ResourceId, kind: ResourceKind, permalink: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            format: None,
            mime_type: None,
            permalink: permalink.into(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Returns true for attachment-like resources, which are classified by MIME type.
    pub fn is_attachment(&self) -> bool {
        self.kind == ResourceKind::Attachment
    }

    /// Coarse media kind: the part of the MIME type before `/` (`image/png` → `image`).
    pub fn media_kind(&self) -> Option<&str> {
        self.mime_type
            .as_deref()
            .map(|mime| mime.split('/').next().unwrap_or(mime))
            .filter(|kind| !kind.is_empty())
    }
}

/// Either a bare resource ID or an already loaded record.
///
/// Functions that accept "a resource" take this and normalize to an ID first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    ById(ResourceId),
    ByRecord(Resource),
}

impl ResourceRef {
    pub fn id(&self) -> ResourceId {
        match self {
            Self::ById(id) => *id,
            Self::ByRecord(resource) => resource.id,
        }
    }
}

impl From<ResourceId> for ResourceRef {
    fn from(id: ResourceId) -> Self {
        Self::ById(id)
    }
}

impl From<Resource> for ResourceRef {
    fn from(resource: Resource) -> Self {
        Self::ByRecord(resource)
    }
}
