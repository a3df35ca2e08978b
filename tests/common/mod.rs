#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use hum::api::routes::public_routes;
use hum::application::hooks::Hooks;
use hum::application::services::{ShortlinkSettings, UnknownFormatPolicy};
use hum::domain::entities::{Resource, ResourceId, ResourceKind};
use hum::domain::repositories::ResourceRepository;
use hum::error::AppError;
use hum::infrastructure::persistence::InMemoryResourceRepository;
use hum::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub const SHORTLINK_BASE: &str = "http://ex.am/";

/// Store with a standard post (123 → `b/23`), a status note (61 → `t/11`)
/// and an image attachment (7200 → `p/200`).
pub fn seeded_repository() -> InMemoryResourceRepository {
    InMemoryResourceRepository::new()
        .with_resource(Resource::new(
            123,
            ResourceKind::Post,
            "http://example.com/2024/hello-world",
        ))
        .with_resource(
            Resource::new(61, ResourceKind::Post, "http://example.com/2024/status")
                .with_format("status"),
        )
        .with_resource(
            Resource::new(7200, ResourceKind::Attachment, "http://example.com/sunset.jpg")
                .with_mime_type("image/jpeg"),
        )
        .with_resource(
            Resource::new(5000, ResourceKind::Post, "http://example.com/2024/chat")
                .with_format("chat"),
        )
}

pub fn settings() -> ShortlinkSettings {
    ShortlinkSettings {
        base_override: None,
        base_option: Some(SHORTLINK_BASE.to_string()),
        home_url: "http://example.com".to_string(),
    }
}

pub fn create_test_state(repository: Arc<dyn ResourceRepository>, hooks: Hooks) -> AppState {
    AppState::new(repository, hooks, settings(), UnknownFormatPolicy::Default)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(public_routes().with_state(state)).unwrap()
}

pub fn default_server() -> TestServer {
    test_server(create_test_state(Arc::new(seeded_repository()), Hooks::new()))
}

/// Resource store whose backend is down.
pub struct UnreachableRepository;

#[async_trait]
impl ResourceRepository for UnreachableRepository {
    async fn find_by_id(&self, _id: ResourceId) -> Result<Option<Resource>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn permalink(&self, _id: ResourceId) -> Result<Option<String>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
