//! Handler for short path redirects.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects short paths and legacy IDs; everything else is a 404.
///
/// Mounted as the router fallback, so any path not claimed by another route
/// lands here.
///
/// # Request Flow
///
/// 1. If the path looks like `/{type}` or `/{type}/{id...}`, dispatch it
/// 2. Otherwise, or if dispatch finds nothing, try it as a legacy ID
/// 3. Return 301 Moved Permanently on success
///
/// # Errors
///
/// Returns 404 Not Found when nothing claims the path.
/// Returns 500 Internal Server Error if the resource store fails.
pub async fn short_path_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let raw_path = uri.path();

    if let Some(url) = state.redirect_target(raw_path).await? {
        return moved_permanently(&url);
    }

    Err(AppError::not_found(
        "Short link not found",
        json!({ "path": raw_path }),
    ))
}

fn moved_permanently(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(url).map_err(|_| {
        AppError::internal(
            "Redirect target is not a valid header value",
            json!({ "location": url }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
