//! Model and HF repository payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{HfModelRepo, Model};

/// Body of `POST /v1/models`; scope fields come from the caller headers
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModelRequest {
    pub model_id: String,
    pub path: String,
    #[serde(default)]
    pub is_published: bool,
}

/// Body of `PATCH /v1/models/{model_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateModelRequest {
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListModelsQuery {
    #[serde(default)]
    pub only_published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model_id: String,
    pub tenant_id: String,
    pub organization_id: String,
    pub project_id: String,
    pub path: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Model> for ModelResponse {
    fn from(model: &Model) -> Self {
        Self {
            model_id: model.model_id().to_string(),
            tenant_id: model.tenant_id().to_string(),
            organization_id: model.organization_id().to_string(),
            project_id: model.project_id().to_string(),
            path: model.path().to_string(),
            is_published: model.is_published(),
            created_at: model.lifecycle().created_at,
            updated_at: model.lifecycle().updated_at,
        }
    }
}

/// List envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelResponse>,
}

impl ModelsResponse {
    pub fn new(models: &[Model]) -> Self {
        Self {
            object: "list".to_string(),
            data: models.iter().map(ModelResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHfModelRepoRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfModelRepoResponse {
    pub name: String,
    pub tenant_id: String,
    pub organization_id: String,
    pub project_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&HfModelRepo> for HfModelRepoResponse {
    fn from(repo: &HfModelRepo) -> Self {
        Self {
            name: repo.name().to_string(),
            tenant_id: repo.tenant_id().to_string(),
            organization_id: repo.organization_id().to_string(),
            project_id: repo.project_id().to_string(),
            created_at: repo.lifecycle().created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelId, ModelSpec, OrganizationId, ProjectId, TenantId};

    #[test]
    fn test_models_response_format() {
        let model = Model::new(ModelSpec {
            model_id: ModelId::new("m0").unwrap(),
            tenant_id: TenantId::new("t0").unwrap(),
            organization_id: OrganizationId::new("o0").unwrap(),
            project_id: ProjectId::new("p0").unwrap(),
            path: "s3://bucket/m0".to_string(),
            is_published: true,
        });

        let json = serde_json::to_value(ModelsResponse::new(&[model])).unwrap();
        assert_eq!(json["object"], "list");
        assert_eq!(json["data"][0]["model_id"], "m0");
        assert_eq!(json["data"][0]["path"], "s3://bucket/m0");
        assert_eq!(json["data"][0]["is_published"], true);
    }

    #[test]
    fn test_create_request_defaults_to_unpublished() {
        let req: CreateModelRequest =
            serde_json::from_str(r#"{"model_id":"m0","path":"p"}"#).unwrap();
        assert!(!req.is_published);
    }
}
