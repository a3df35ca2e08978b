//! Public route configuration.

use crate::api::handlers::{health_handler, short_path_handler, shortlink_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All public routes.
///
/// # Endpoints
///
/// - `GET /health`          - Resource store health check
/// - `GET /api/shortlink`   - Shortlink and feed tag for a resource
/// - anything else          - Short path or legacy ID redirect, or 404
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/shortlink", get(shortlink_handler))
        .fallback(short_path_handler)
}
