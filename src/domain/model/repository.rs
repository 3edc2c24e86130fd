//! Model repository trait

use async_trait::async_trait;

use super::{Model, ModelId};
use crate::domain::scope::ProjectId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Filter predicate over persisted models
///
/// Every field left as `None` matches any value. Soft-deleted models never
/// match, except when the filter is handed to [`ModelRepository::hard_delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub model_id: Option<ModelId>,
    pub project_id: Option<ProjectId>,
    pub only_published: bool,
}

impl ModelFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    pub fn with_project_id(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn published(mut self) -> Self {
        self.only_published = true;
        self
    }

    /// Whether a model matches, ignoring the soft-delete marker
    pub fn matches_any_state(&self, model: &Model) -> bool {
        if let Some(model_id) = &self.model_id {
            if model.model_id() != model_id {
                return false;
            }
        }

        if let Some(project_id) = &self.project_id {
            if model.project_id() != project_id {
                return false;
            }
        }

        !self.only_published || model.is_published()
    }

    /// Whether a live (not soft-deleted) model matches
    pub fn matches(&self, model: &Model) -> bool {
        !model.is_deleted() && self.matches_any_state(model)
    }
}

/// Repository trait for Model persistence
///
/// Implementations must enforce model ID uniqueness atomically at insert time
/// and report affected-row counts for mutations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Insert a new model, failing with `AlreadyExists` on a model ID collision
    async fn insert(&self, model: Model) -> Result<Model, DomainError>;

    /// Find one live model matching the filter
    async fn find_one(&self, filter: &ModelFilter) -> Result<Option<Model>, DomainError>;

    /// Find all live models matching the filter, in no particular order
    async fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, DomainError>;

    /// Set the publish flag on live matching models, returning the affected count
    async fn update_published(
        &self,
        filter: &ModelFilter,
        is_published: bool,
    ) -> Result<u64, DomainError>;

    /// Permanently remove matching models, soft-deleted ones included
    async fn hard_delete(&self, filter: &ModelFilter) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lifecycle::EntityLifecycle;
    use crate::domain::scope::{OrganizationId, TenantId};
    use crate::domain::ModelSpec;
    use chrono::Utc;

    fn model(id: &str, project: &str, published: bool) -> Model {
        Model::new(ModelSpec {
            model_id: ModelId::new(id).unwrap(),
            tenant_id: TenantId::new("t0").unwrap(),
            organization_id: OrganizationId::new("o0").unwrap(),
            project_id: ProjectId::new(project).unwrap(),
            path: "s3://models".to_string(),
            is_published: published,
        })
    }

    #[test]
    fn test_empty_filter_matches_live_models() {
        let filter = ModelFilter::new();
        assert!(filter.matches(&model("m0", "p0", false)));
        assert!(filter.matches(&model("m1", "p1", true)));
    }

    #[test]
    fn test_filter_by_model_and_project() {
        let filter = ModelFilter::new()
            .with_model_id(ModelId::new("m0").unwrap())
            .with_project_id(ProjectId::new("p0").unwrap());

        assert!(filter.matches(&model("m0", "p0", false)));
        assert!(!filter.matches(&model("m0", "p1", false)));
        assert!(!filter.matches(&model("m1", "p0", false)));
    }

    #[test]
    fn test_published_filter() {
        let filter = ModelFilter::new().published();
        assert!(filter.matches(&model("m0", "p0", true)));
        assert!(!filter.matches(&model("m0", "p0", false)));
    }

    #[test]
    fn test_soft_deleted_never_matches() {
        let now = Utc::now();
        let deleted = model("m0", "p0", true)
            .with_lifecycle(EntityLifecycle::restore(now, now, Some(now)));
        let filter = ModelFilter::new().with_model_id(ModelId::new("m0").unwrap());

        assert!(!filter.matches(&deleted));
        assert!(filter.matches_any_state(&deleted));
    }

    #[tokio::test]
    async fn test_mock_model_repository() {
        let mut mock = MockModelRepository::new();

        mock.expect_find().returning(|_| Ok(vec![]));

        let result = mock.find(&ModelFilter::new()).await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
