//! HTTP server initialization and runtime setup.
//!
//! Handles the resource store connection, hook registry, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::ResourceRepository;
use crate::infrastructure::persistence::{InMemoryResourceRepository, PgResourceRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (or the in-memory store)
/// - Hook registry from configured rules
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_repository(&config).await?;

    let state = AppState::new(
        repository,
        config.hooks(),
        config.shortlink_settings(),
        config.unknown_format_policy,
    );
    tracing::info!(
        local_types = ?state.hooks.local_types(),
        base = %state.shortlinks.base_url(),
        "Shortener ready"
    );

    let app = app_router(state, config.rate_limit);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects the resource store selected by `DATABASE_URL`.
async fn open_repository(config: &Config) -> Result<Arc<dyn ResourceRepository>> {
    let Some(ref database_url) = config.database_url else {
        tracing::warn!("DATABASE_URL not set, serving from an empty in-memory store");
        return Ok(Arc::new(InMemoryResourceRepository::new()));
    };

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(Arc::new(PgResourceRepository::new(Arc::new(pool))))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
