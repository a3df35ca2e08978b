//! Short path entities: the `{type}/{id}` tail of a shortlink.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::path::split_first;

/// Returned when a string is not a single lowercase ASCII letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type prefix '{0}': expected a single lowercase letter")]
pub struct InvalidTypePrefix(pub String);

/// Single-letter namespace of a short path.
///
/// Built-in prefixes follow the Whistle convention; extensions may introduce
/// any other lowercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypePrefix(char);

impl TypePrefix {
    /// Blog posts; the default.
    pub const BLOG: Self = Self('b');
    /// Short-form content: asides, statuses, links.
    pub const SHORT: Self = Self('t');
    /// Audio and video.
    pub const MEDIA: Self = Self('a');
    /// Photos and images.
    pub const PHOTO: Self = Self('p');
    /// Items identified by ISBN/ASIN.
    pub const ITEM: Self = Self('i');

    /// Prefixes served from local content unless reconfigured.
    pub const LOCAL_DEFAULTS: [Self; 4] = [Self::BLOG, Self::SHORT, Self::MEDIA, Self::PHOTO];

    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for TypePrefix {
    type Error = InvalidTypePrefix;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| InvalidTypePrefix(c.to_string()))
    }
}

impl FromStr for TypePrefix {
    type Err = InvalidTypePrefix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| InvalidTypePrefix(s.to_string())),
            _ => Err(InvalidTypePrefix(s.to_string())),
        }
    }
}

impl fmt::Display for TypePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed short path. `id` is `None` when the path had no `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortPath {
    pub prefix: TypePrefix,
    pub id: Option<String>,
}

impl ShortPath {
    pub fn new(prefix: TypePrefix, id: Option<String>) -> Self {
        Self { prefix, id }
    }

    /// Splits `raw` on its first `/` into prefix and id.
    ///
    /// Returns `None` when the head is not a valid [`TypePrefix`].
    pub fn parse(raw: &str) -> Option<Self> {
        let (head, tail) = split_first(raw);
        let prefix = head.parse().ok()?;
        Some(Self::new(prefix, tail.map(str::to_string)))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Same prefix, different id.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self::new(self.prefix, Some(id.into()))
    }
}

impl fmt::Display for ShortPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}/{}", self.prefix, id),
            None => write!(f, "{}", self.prefix),
        }
    }
}

/// Sub-path of an `/i/` short path: `{subtype}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPath {
    pub subtype: String,
    pub id: Option<String>,
}

impl ItemPath {
    /// Splits the id of an `/i/` path. A missing id gives an empty subtype.
    pub fn parse(path: Option<&str>) -> Self {
        let (subtype, id) = split_first(path.unwrap_or_default());
        Self {
            subtype: subtype.to_string(),
            id: id.map(str::to_string),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
