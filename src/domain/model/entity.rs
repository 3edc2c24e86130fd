//! Model entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_model_id, ModelValidationError};
use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::scope::{OrganizationId, ProjectId, TenantId};

/// Model identifier - globally unique across every tenant and project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Create a new ModelId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ModelValidationError> {
        let id = id.into();
        validate_model_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelId {
    type Error = ModelValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to register a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub model_id: ModelId,
    pub tenant_id: TenantId,
    pub organization_id: OrganizationId,
    pub project_id: ProjectId,
    /// Opaque storage location of the model artifact
    pub path: String,
    pub is_published: bool,
}

/// A registered model artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    model_id: ModelId,
    tenant_id: TenantId,
    organization_id: OrganizationId,
    project_id: ProjectId,
    path: String,
    is_published: bool,
    #[serde(flatten)]
    lifecycle: EntityLifecycle,
}

impl Model {
    /// Create a new live model from a spec
    pub fn new(spec: ModelSpec) -> Self {
        Self {
            model_id: spec.model_id,
            tenant_id: spec.tenant_id,
            organization_id: spec.organization_id,
            project_id: spec.project_id,
            path: spec.path,
            is_published: spec.is_published,
            lifecycle: EntityLifecycle::new(),
        }
    }

    /// Builder-style method to restore persisted lifecycle attributes
    pub fn with_lifecycle(mut self, lifecycle: EntityLifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    // Getters

    pub fn model_id(&self) -> &ModelId {
        &self.model_id
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

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn lifecycle(&self) -> &EntityLifecycle {
        &self.lifecycle
    }

    pub fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// The `ModelSpec` this model was registered with, reflecting the current publish flag
    pub fn spec(&self) -> ModelSpec {
        ModelSpec {
            model_id: self.model_id.clone(),
            tenant_id: self.tenant_id.clone(),
            organization_id: self.organization_id.clone(),
            project_id: self.project_id.clone(),
            path: self.path.clone(),
            is_published: self.is_published,
        }
    }

    /// Set the publish flag
    pub fn set_published(&mut self, is_published: bool) {
        self.is_published = is_published;
        self.lifecycle.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn spec(id: &str, project: &str, published: bool) -> ModelSpec {
        ModelSpec {
            model_id: ModelId::new(id).unwrap(),
            tenant_id: TenantId::new("t0").unwrap(),
            organization_id: OrganizationId::new("o0").unwrap(),
            project_id: ProjectId::new(project).unwrap(),
            path: format!("s3://models/{}", id),
            is_published: published,
        }
    }

    #[test]
    fn test_model_id_valid() {
        let id = ModelId::new("google-gemma-2b-it").unwrap();
        assert_eq!(id.as_str(), "google-gemma-2b-it");
    }

    #[test]
    fn test_model_id_empty() {
        assert!(ModelId::new("").is_err());
    }

    #[test]
    fn test_model_from_spec() {
        let model = Model::new(spec("m0", "p0", false));

        assert_eq!(model.model_id().as_str(), "m0");
        assert_eq!(model.tenant_id().as_str(), "t0");
        assert_eq!(model.organization_id().as_str(), "o0");
        assert_eq!(model.project_id().as_str(), "p0");
        assert_eq!(model.path(), "s3://models/m0");
        assert!(!model.is_published());
        assert!(!model.is_deleted());
        assert_eq!(model.spec(), spec("m0", "p0", false));
    }

    #[test]
    fn test_set_published_touches_lifecycle() {
        let mut model = Model::new(spec("m0", "p0", false));
        let before = model.lifecycle().updated_at;

        model.set_published(true);

        assert!(model.is_published());
        assert!(model.lifecycle().updated_at >= before);
        assert_eq!(model.lifecycle().created_at, before);
    }

    #[test]
    fn test_with_lifecycle_restores_deleted_marker() {
        let now = Utc::now();
        let model = Model::new(spec("m0", "p0", true))
            .with_lifecycle(EntityLifecycle::restore(now, now, Some(now)));

        assert!(model.is_deleted());
    }

    #[test]
    fn test_model_serialization_flattens_lifecycle() {
        let model = Model::new(spec("m0", "p0", true));
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["model_id"], "m0");
        assert_eq!(json["is_published"], true);
        assert!(json.get("created_at").is_some());
        assert!(json.get("deleted_at").is_none());
    }
}
