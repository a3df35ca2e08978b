//! In-memory implementation of the resource repository.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{Resource, ResourceId};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

/// Resource store backed by a `DashMap`.
///
/// ID `0` is the "no resource" sentinel and is never stored.
#[derive(Debug, Default)]
pub struct InMemoryResourceRepository {
    resources: DashMap<ResourceId, Resource>,
}

impl InMemoryResourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_resource(self, resource: Resource) -> Self {
        self.insert(resource);
        self
    }

    /// Adds or replaces a resource. Returns `false` for the `0` sentinel.
    pub fn insert(&self, resource: Resource) -> bool {
        if resource.id == 0 {
            return false;
        }
        self.resources.insert(resource.id, resource);
        true
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Resource>, AppError> {
        Ok(self.resources.get(&id).map(|entry| entry.value().clone()))
    }

    async fn permalink(&self, id: ResourceId) -> Result<Option<String>, AppError> {
        Ok(self
            .resources
            .get(&id)
            .map(|entry| entry.value().permalink.clone()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResourceKind;

    fn post(id: ResourceId) -> Resource {
        Resource::new(id, ResourceKind::Post, format!("http://ex.am/?p={id}"))
    }

    #[tokio::test]
    async fn test_find_and_permalink() {
        let repo = InMemoryResourceRepository::new().with_resource(post(123));

        let found = repo.find_by_id(123).await.unwrap().unwrap();
        assert_eq!(found.kind, ResourceKind::Post);
        assert_eq!(
            repo.permalink(123).await.unwrap().as_deref(),
            Some("http://ex.am/?p=123")
        );
        assert_eq!(repo.find_by_id(124).await.unwrap(), None);
        assert_eq!(repo.permalink(124).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_zero_never_resolves() {
        let repo = InMemoryResourceRepository::new();
        assert!(!repo.insert(post(0)));
        assert_eq!(repo.find_by_id(0).await.unwrap(), None);
        assert_eq!(repo.permalink(0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_replaces() {
        let repo = InMemoryResourceRepository::new().with_resource(post(7));
        repo.insert(post(7).with_format("status"));

        let found = repo.find_by_id(7).await.unwrap().unwrap();
        assert_eq!(found.format.as_deref(), Some("status"));
        assert!(repo.health_check().await);
    }
}
