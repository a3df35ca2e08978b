//! Handler for shortlink lookup.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::shortlink::{ShortlinkQuery, ShortlinkResponse};
use crate::application::services::{QueriedObject, ShortlinkContext};
use crate::domain::entities::ResourceRef;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the shortlink of a resource, or of the front page.
///
/// # Endpoint
///
/// `GET /api/shortlink?id={id}`
///
/// # Response
///
/// ```json
/// {
///   "shortlink": "http://ex.am/b/23",
///   "link_tag": "<atom:link rel=\"shortlink\" href=\"http://ex.am/b/23\" />"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a non-negative integer.
/// Returns 404 Not Found if the resource is unknown or cannot be classified.
pub async fn shortlink_handler(
    State(state): State<AppState>,
    query: Result<Query<ShortlinkQuery>, QueryRejection>,
) -> Result<Json<ShortlinkResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text(), json!({})))?;

    let context = match query.id {
        Some(id) => ShortlinkContext::Post(ResourceRef::ById(id)),
        None => ShortlinkContext::Query(QueriedObject::FrontPage),
    };

    let shortlink = state
        .shortlinks
        .compute_shortlink(None, context)
        .await?
        .ok_or_else(|| {
            AppError::not_found("No shortlink for this resource", json!({ "id": query.id }))
        })?;

    let link_tag = state.shortlinks.link_tag(&shortlink)?;

    Ok(Json(ShortlinkResponse {
        shortlink,
        link_tag,
    }))
}
