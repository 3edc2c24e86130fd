//! In-memory HF repository registration repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::hf_repo::{HfModelRepo, HfModelRepoRepository, HfRepoName};
use crate::domain::scope::TenantId;
use crate::domain::DomainError;

/// Thread-safe in-memory registration repository keyed by `(tenant, name)`
#[derive(Debug, Default)]
pub struct InMemoryHfModelRepoRepository {
    repos: RwLock<HashMap<(String, String), HfModelRepo>>,
}

impl InMemoryHfModelRepoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(tenant_id: &TenantId, name: &HfRepoName) -> (String, String) {
    (tenant_id.as_str().to_string(), name.as_str().to_string())
}

#[async_trait]
impl HfModelRepoRepository for InMemoryHfModelRepoRepository {
    async fn insert(&self, repo: HfModelRepo) -> Result<HfModelRepo, DomainError> {
        let key = key(repo.tenant_id(), repo.name());
        let mut repos = self.repos.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if repos.contains_key(&key) {
            return Err(DomainError::already_exists(format!(
                "HF model repo '{}' already exists",
                repo.name()
            )));
        }

        repos.insert(key, repo.clone());
        Ok(repo)
    }

    async fn find_by_name(
        &self,
        tenant_id: &TenantId,
        name: &HfRepoName,
    ) -> Result<Option<HfModelRepo>, DomainError> {
        let repos = self.repos.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(repos
            .get(&key(tenant_id, name))
            .filter(|r| !r.is_deleted())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scope::CallerScope;

    fn scope(tenant: &str) -> CallerScope {
        CallerScope::parse(tenant, "o0", "p0").unwrap()
    }

    fn name(n: &str) -> HfRepoName {
        HfRepoName::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryHfModelRepoRepository::new();
        let s = scope("t0");

        assert!(repo
            .find_by_name(&s.tenant_id, &name("r0"))
            .await
            .unwrap()
            .is_none());

        repo.insert(HfModelRepo::new(name("r0"), &s)).await.unwrap();

        let found = repo
            .find_by_name(&s.tenant_id, &name("r0"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name().as_str(), "r0");
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let repo = InMemoryHfModelRepoRepository::new();
        let s = scope("t0");

        repo.insert(HfModelRepo::new(name("r0"), &s)).await.unwrap();
        let result = repo.insert(HfModelRepo::new(name("r0"), &s)).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_names_are_scoped_by_tenant() {
        let repo = InMemoryHfModelRepoRepository::new();

        repo.insert(HfModelRepo::new(name("r0"), &scope("t0")))
            .await
            .unwrap();
        repo.insert(HfModelRepo::new(name("r0"), &scope("t1")))
            .await
            .unwrap();

        let other = TenantId::new("t2").unwrap();
        assert!(repo.find_by_name(&other, &name("r0")).await.unwrap().is_none());
    }
}
