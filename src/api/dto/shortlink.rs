//! DTOs for the shortlink lookup endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ResourceId;

/// Query parameters for `GET /api/shortlink`.
///
/// Without `id` the front page shortlink is returned.
#[derive(Debug, Default, Deserialize)]
pub struct ShortlinkQuery {
    pub id: Option<ResourceId>,
}

/// A shortlink and the feed markup advertising it.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortlinkResponse {
    pub shortlink: String,
    pub link_tag: String,
}
