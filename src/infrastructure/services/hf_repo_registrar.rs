//! HF repository registrar - Tenant-scoped registration of external model repositories

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::hf_repo::{HfModelRepo, HfModelRepoRepository, HfRepoName};
use crate::domain::scope::CallerScope;
use crate::domain::DomainError;

/// Registers external repository names on behalf of a caller
#[derive(Clone)]
pub struct HfModelRepoRegistrar {
    repository: Arc<dyn HfModelRepoRepository>,
}

impl std::fmt::Debug for HfModelRepoRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfModelRepoRegistrar").finish_non_exhaustive()
    }
}

impl HfModelRepoRegistrar {
    pub fn new(repository: Arc<dyn HfModelRepoRepository>) -> Self {
        Self { repository }
    }

    /// Get a registration visible to the caller's tenant
    pub async fn get_hf_model_repo(
        &self,
        name: &HfRepoName,
        scope: &CallerScope,
    ) -> Result<HfModelRepo, DomainError> {
        debug!(name = %name, tenant_id = %scope.tenant_id, "Getting HF model repo");

        self.repository
            .find_by_name(&scope.tenant_id, name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("HF model repo '{}' not found", name)))
    }

    /// Register a name under the caller's scope
    ///
    /// Fails with `AlreadyExists` when the tenant already registered the name.
    pub async fn create_hf_model_repo(
        &self,
        name: HfRepoName,
        scope: &CallerScope,
    ) -> Result<HfModelRepo, DomainError> {
        let repo = self.repository.insert(HfModelRepo::new(name, scope)).await?;

        info!(
            name = %repo.name(),
            tenant_id = %repo.tenant_id(),
            project_id = %repo.project_id(),
            "Created HF model repo"
        );

        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hf_repo::MockHfModelRepoRepository;
    use crate::infrastructure::hf_repo::InMemoryHfModelRepoRepository;

    fn create_registrar() -> HfModelRepoRegistrar {
        HfModelRepoRegistrar::new(Arc::new(InMemoryHfModelRepoRepository::new()))
    }

    fn scope(tenant: &str, project: &str) -> CallerScope {
        CallerScope::parse(tenant, "o0", project).unwrap()
    }

    fn name(n: &str) -> HfRepoName {
        HfRepoName::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_get_create_get() {
        let registrar = create_registrar();
        let caller = scope("t0", "p0");

        let missing = registrar.get_hf_model_repo(&name("r0"), &caller).await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));

        let created = registrar
            .create_hf_model_repo(name("r0"), &caller)
            .await
            .unwrap();
        assert_eq!(created.project_id().as_str(), "p0");

        let got = registrar.get_hf_model_repo(&name("r0"), &caller).await.unwrap();
        assert_eq!(got.name().as_str(), "r0");
        assert_eq!(got.tenant_id().as_str(), "t0");
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let registrar = create_registrar();

        registrar
            .create_hf_model_repo(name("r0"), &scope("t0", "p0"))
            .await
            .unwrap();

        // A second project of the same tenant cannot take the name either
        let result = registrar
            .create_hf_model_repo(name("r0"), &scope("t0", "p1"))
            .await;
        assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_registration_invisible_to_other_tenants() {
        let registrar = create_registrar();

        registrar
            .create_hf_model_repo(name("r0"), &scope("t0", "p0"))
            .await
            .unwrap();

        let result = registrar.get_hf_model_repo(&name("r0"), &scope("t1", "p0")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        registrar
            .create_hf_model_repo(name("r0"), &scope("t1", "p0"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock = MockHfModelRepoRepository::new();
        mock.expect_find_by_name()
            .returning(|_, _| Err(DomainError::storage("timeout")));

        let registrar = HfModelRepoRegistrar::new(Arc::new(mock));
        let result = registrar.get_hf_model_repo(&name("r0"), &scope("t0", "p0")).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
