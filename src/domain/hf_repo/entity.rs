//! HF repository registration entity

use serde::{Deserialize, Serialize};

use super::validation::{validate_hf_repo_name, HfRepoValidationError};
use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::scope::{CallerScope, OrganizationId, ProjectId, TenantId};

/// Name of an externally hosted model repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HfRepoName(String);

impl HfRepoName {
    /// Create a new HfRepoName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, HfRepoValidationError> {
        let name = name.into();
        validate_hf_repo_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HfRepoName {
    type Error = HfRepoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HfRepoName> for String {
    fn from(name: HfRepoName) -> Self {
        name.0
    }
}

impl std::fmt::Display for HfRepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tenant's registration of an external repository name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HfModelRepo {
    name: HfRepoName,
    tenant_id: TenantId,
    organization_id: OrganizationId,
    project_id: ProjectId,
    #[serde(flatten)]
    lifecycle: EntityLifecycle,
}

impl HfModelRepo {
    /// Create a new registration owned by the caller
    pub fn new(name: HfRepoName, scope: &CallerScope) -> Self {
        Self {
            name,
            tenant_id: scope.tenant_id.clone(),
            organization_id: scope.organization_id.clone(),
            project_id: scope.project_id.clone(),
            lifecycle: EntityLifecycle::new(),
        }
    }

    /// Builder-style method to restore persisted lifecycle attributes
    pub fn with_lifecycle(mut self, lifecycle: EntityLifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn name(&self) -> &HfRepoName {
        &self.name
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn lifecycle(&self) -> &EntityLifecycle {
        &self.lifecycle
    }

    pub fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }
}
