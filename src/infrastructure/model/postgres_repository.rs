//! PostgreSQL model repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgRow, Postgres};
use sqlx::{QueryBuilder, Row};

use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::model::{Model, ModelFilter, ModelId, ModelRepository, ModelSpec};
use crate::domain::scope::{OrganizationId, ProjectId, TenantId};
use crate::domain::DomainError;
use crate::infrastructure::storage::map_sqlx_error;

const MODEL_COLUMNS: &str = "model_id, tenant_id, organization_id, project_id, path, \
                             is_published, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of ModelRepository
///
/// Relies on the `idx_models_model_id` unique index for atomic uniqueness.
#[derive(Debug, Clone)]
pub struct PostgresModelRepository {
    pool: PgPool,
}

impl PostgresModelRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause for a filter
fn push_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &ModelFilter,
    include_deleted: bool,
) {
    builder.push(" WHERE TRUE");

    if !include_deleted {
        builder.push(" AND deleted_at IS NULL");
    }

    if let Some(model_id) = &filter.model_id {
        builder
            .push(" AND model_id = ")
            .push_bind(model_id.as_str().to_string());
    }

    if let Some(project_id) = &filter.project_id {
        builder
            .push(" AND project_id = ")
            .push_bind(project_id.as_str().to_string());
    }

    if filter.only_published {
        builder.push(" AND is_published = TRUE");
    }
}

#[async_trait]
impl ModelRepository for PostgresModelRepository {
    async fn insert(&self, model: Model) -> Result<Model, DomainError> {
        let lifecycle = model.lifecycle();

        sqlx::query(
            r#"
            INSERT INTO models (model_id, tenant_id, organization_id, project_id, path,
                                is_published, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(model.model_id().as_str())
        .bind(model.tenant_id().as_str())
        .bind(model.organization_id().as_str())
        .bind(model.project_id().as_str())
        .bind(model.path())
        .bind(model.is_published())
        .bind(lifecycle.created_at)
        .bind(lifecycle.updated_at)
        .bind(lifecycle.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_sqlx_error(
                e,
                "Failed to insert model",
                &format!("Model '{}' already exists", model.model_id()),
            )
        })?;

        Ok(model)
    }

    async fn find_one(&self, filter: &ModelFilter) -> Result<Option<Model>, DomainError> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM models", MODEL_COLUMNS));
        push_filter(&mut builder, filter, false);
        builder.push(" LIMIT 1");

        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get model: {}", e)))?;

        row.as_ref().map(row_to_model).transpose()
    }

    async fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, DomainError> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM models", MODEL_COLUMNS));
        push_filter(&mut builder, filter, false);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list models: {}", e)))?;

        rows.iter().map(row_to_model).collect()
    }

    async fn update_published(
        &self,
        filter: &ModelFilter,
        is_published: bool,
    ) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE models SET is_published = ");
        builder.push_bind(is_published);
        builder.push(", updated_at = NOW()");
        push_filter(&mut builder, filter, false);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update model: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn hard_delete(&self, filter: &ModelFilter) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM models");
        push_filter(&mut builder, filter, true);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete model: {}", e)))?;

        Ok(result.rows_affected())
    }
}

fn row_to_model(row: &PgRow) -> Result<Model, DomainError> {
    let column = |e: sqlx::Error| DomainError::storage(format!("Failed to read model row: {}", e));

    let model_id: String = row.try_get("model_id").map_err(column)?;
    let tenant_id: String = row.try_get("tenant_id").map_err(column)?;
    let organization_id: String = row.try_get("organization_id").map_err(column)?;
    let project_id: String = row.try_get("project_id").map_err(column)?;
    let path: String = row.try_get("path").map_err(column)?;
    let is_published: bool = row.try_get("is_published").map_err(column)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(column)?;
    let deleted_at: Option<DateTime<Utc>> = row.try_get("deleted_at").map_err(column)?;

    let spec = ModelSpec {
        model_id: ModelId::new(model_id)
            .map_err(|e| DomainError::storage(format!("Invalid model ID in database: {}", e)))?,
        tenant_id: TenantId::new(tenant_id)
            .map_err(|e| DomainError::storage(format!("Invalid tenant ID in database: {}", e)))?,
        organization_id: OrganizationId::new(organization_id).map_err(|e| {
            DomainError::storage(format!("Invalid organization ID in database: {}", e))
        })?,
        project_id: ProjectId::new(project_id)
            .map_err(|e| DomainError::storage(format!("Invalid project ID in database: {}", e)))?,
        path,
        is_published,
    };

    Ok(Model::new(spec).with_lifecycle(EntityLifecycle::restore(
        created_at, updated_at, deleted_at,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(filter: &ModelFilter, include_deleted: bool) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM models");
        push_filter(&mut builder, filter, include_deleted);
        builder.sql().to_string()
    }

    #[test]
    fn test_filter_excludes_soft_deleted_by_default() {
        let sql = sql_for(&ModelFilter::new(), false);
        assert_eq!(sql, "SELECT 1 FROM models WHERE TRUE AND deleted_at IS NULL");
    }

    #[test]
    fn test_filter_binds_scope() {
        let filter = ModelFilter::new()
            .with_model_id(ModelId::new("m0").unwrap())
            .with_project_id(ProjectId::new("p0").unwrap())
            .published();

        let sql = sql_for(&filter, false);
        assert_eq!(
            sql,
            "SELECT 1 FROM models WHERE TRUE AND deleted_at IS NULL AND model_id = $1 \
             AND project_id = $2 AND is_published = TRUE"
        );
    }

    #[test]
    fn test_hard_delete_filter_bypasses_soft_delete() {
        let filter = ModelFilter::new().with_model_id(ModelId::new("m0").unwrap());

        let sql = sql_for(&filter, true);
        assert!(!sql.contains("deleted_at"));
        assert!(sql.contains("model_id = $1"));
    }
}
