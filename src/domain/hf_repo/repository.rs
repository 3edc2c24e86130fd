//! HF repository registration repository trait

use async_trait::async_trait;

use super::{HfModelRepo, HfRepoName};
use crate::domain::scope::TenantId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for HF repository registrations
///
/// Registrations are unique per `(tenant, name)`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HfModelRepoRepository: Send + Sync {
    /// Insert a registration, failing with `AlreadyExists` if the tenant already registered the name
    async fn insert(&self, repo: HfModelRepo) -> Result<HfModelRepo, DomainError>;

    /// Find a live registration by tenant and name
    async fn find_by_name(
        &self,
        tenant_id: &TenantId,
        name: &HfRepoName,
    ) -> Result<Option<HfModelRepo>, DomainError>;
}
