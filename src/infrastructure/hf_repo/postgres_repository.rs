//! PostgreSQL HF repository registration repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::domain::hf_repo::{HfModelRepo, HfModelRepoRepository, HfRepoName};
use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::scope::{CallerScope, OrganizationId, ProjectId, TenantId};
use crate::domain::DomainError;
use crate::infrastructure::storage::map_sqlx_error;

/// PostgreSQL implementation of HfModelRepoRepository
#[derive(Debug, Clone)]
pub struct PostgresHfModelRepoRepository {
    pool: PgPool,
}

impl PostgresHfModelRepoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HfModelRepoRepository for PostgresHfModelRepoRepository {
    async fn insert(&self, repo: HfModelRepo) -> Result<HfModelRepo, DomainError> {
        let lifecycle = repo.lifecycle();

        sqlx::query(
            r#"
            INSERT INTO hf_model_repos (name, tenant_id, organization_id, project_id,
                                        created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(repo.name().as_str())
        .bind(repo.tenant_id().as_str())
        .bind(repo.organization_id().as_str())
        .bind(repo.project_id().as_str())
        .bind(lifecycle.created_at)
        .bind(lifecycle.updated_at)
        .bind(lifecycle.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_sqlx_error(
                e,
                "Failed to insert HF model repo",
                &format!("HF model repo '{}' already exists", repo.name()),
            )
        })?;

        Ok(repo)
    }

    async fn find_by_name(
        &self,
        tenant_id: &TenantId,
        name: &HfRepoName,
    ) -> Result<Option<HfModelRepo>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT name, tenant_id, organization_id, project_id,
                   created_at, updated_at, deleted_at
            FROM hf_model_repos
            WHERE tenant_id = $1 AND name = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(tenant_id.as_str())
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get HF model repo: {}", e)))?;

        row.as_ref().map(row_to_hf_model_repo).transpose()
    }
}

fn row_to_hf_model_repo(row: &PgRow) -> Result<HfModelRepo, DomainError> {
    let column =
        |e: sqlx::Error| DomainError::storage(format!("Failed to read HF model repo row: {}", e));
    let invalid = |e: String| DomainError::storage(format!("Invalid HF model repo row: {}", e));

    let name: String = row.try_get("name").map_err(column)?;
    let tenant_id: String = row.try_get("tenant_id").map_err(column)?;
    let organization_id: String = row.try_get("organization_id").map_err(column)?;
    let project_id: String = row.try_get("project_id").map_err(column)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(column)?;
    let deleted_at: Option<DateTime<Utc>> = row.try_get("deleted_at").map_err(column)?;

    let scope = CallerScope::new(
        TenantId::new(tenant_id).map_err(|e| invalid(e.to_string()))?,
        OrganizationId::new(organization_id).map_err(|e| invalid(e.to_string()))?,
        ProjectId::new(project_id).map_err(|e| invalid(e.to_string()))?,
    );
    let name = HfRepoName::new(name).map_err(|e| invalid(e.to_string()))?;

    Ok(HfModelRepo::new(name, &scope).with_lifecycle(EntityLifecycle::restore(
        created_at, updated_at, deleted_at,
    )))
}
