//! PostgreSQL implementation of the resource repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Resource, ResourceId, ResourceKind};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

/// Read-only view of the `resources` table.
///
/// IDs are `BIGINT` in the database; an ID that does not fit is simply not found.
pub struct PgResourceRepository {
    pool: Arc<PgPool>,
}

impl PgResourceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ResourceRow {
    id: i64,
    kind: String,
    format: Option<String>,
    mime_type: Option<String>,
    permalink: String,
}

impl ResourceRow {
    fn into_resource(self) -> Option<Resource> {
        let id = ResourceId::try_from(self.id).ok()?;
        Some(Resource {
            id,
            kind: ResourceKind::from(self.kind.as_str()),
            format: self.format,
            mime_type: self.mime_type,
            permalink: self.permalink,
        })
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Resource>, AppError> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT id, kind, format, mime_type, permalink
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.and_then(ResourceRow::into_resource))
    }

    async fn permalink(&self, id: ResourceId) -> Result<Option<String>, AppError> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let permalink: Option<String> =
            sqlx::query_scalar(r#"SELECT permalink FROM resources WHERE id = $1"#)
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(permalink)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
