//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{type}/{id}`    - Short path redirect (public)
//! - `GET /{legacy id}`    - Legacy ID redirect (public)
//! - `GET /api/shortlink`  - Shortlink lookup (public)
//! - `GET /health`         - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - apply the per-IP rate limiter; requires the server to
///   provide `ConnectInfo<SocketAddr>`
pub fn app_router(state: AppState, rate_limited: bool) -> NormalizePath<Router> {
    let mut router = api::routes::public_routes().with_state(state);

    if rate_limited {
        router = router.layer(rate_limit::layer());
    }

    let router = router.layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
