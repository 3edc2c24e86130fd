//! Model store - Scoped lookups, listing and publish-state management for models

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::model::{
    validate_model_path, Model, ModelFilter, ModelId, ModelRepository, ModelSpec,
};
use crate::domain::scope::ProjectId;
use crate::domain::DomainError;

/// Model registry store
///
/// Holds no state of its own; every operation is a single call into the
/// repository. The caller picks the method matching its trust level:
/// global lookups for internal callers, project-scoped lookups for tenants,
/// and published-any-project lookups for the shared catalog.
#[derive(Clone)]
pub struct ModelStore {
    repository: Arc<dyn ModelRepository>,
}

impl std::fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStore").finish_non_exhaustive()
    }
}

impl ModelStore {
    /// Create a new ModelStore over the given repository
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    /// Register a new model
    pub async fn create_model(&self, spec: ModelSpec) -> Result<Model, DomainError> {
        validate_model_path(&spec.path)?;

        let model = self.repository.insert(Model::new(spec)).await?;

        info!(
            model_id = %model.model_id(),
            project_id = %model.project_id(),
            is_published = model.is_published(),
            "Created model"
        );

        Ok(model)
    }

    /// Get a model by ID regardless of project or publish state
    pub async fn get_model_by_model_id(&self, model_id: &ModelId) -> Result<Model, DomainError> {
        debug!(model_id = %model_id, "Getting model");

        let filter = ModelFilter::new().with_model_id(model_id.clone());
        self.find_required(&filter, model_id).await
    }

    /// Get a published model by ID from any project
    pub async fn get_published_model_by_model_id(
        &self,
        model_id: &ModelId,
    ) -> Result<Model, DomainError> {
        debug!(model_id = %model_id, "Getting published model");

        let filter = ModelFilter::new().with_model_id(model_id.clone()).published();
        self.find_required(&filter, model_id).await
    }

    /// Get a published model by ID within one project
    pub async fn get_published_model_by_model_id_and_project_id(
        &self,
        model_id: &ModelId,
        project_id: &ProjectId,
    ) -> Result<Model, DomainError> {
        debug!(model_id = %model_id, project_id = %project_id, "Getting published model in project");

        let filter = ModelFilter::new()
            .with_model_id(model_id.clone())
            .with_project_id(project_id.clone())
            .published();
        self.find_required(&filter, model_id).await
    }

    /// List the models of a project, optionally only the published ones
    ///
    /// Ordering is unspecified.
    pub async fn list_models_by_project_id(
        &self,
        project_id: &ProjectId,
        only_published: bool,
    ) -> Result<Vec<Model>, DomainError> {
        let mut filter = ModelFilter::new().with_project_id(project_id.clone());

        if only_published {
            filter = filter.published();
        }

        let models = self.repository.find(&filter).await?;
        debug!(
            project_id = %project_id,
            only_published,
            count = models.len(),
            "Listed models"
        );

        Ok(models)
    }

    /// List published models across every project
    pub async fn list_all_published_models(&self) -> Result<Vec<Model>, DomainError> {
        let models = self.repository.find(&ModelFilter::new().published()).await?;
        debug!(count = models.len(), "Listed published models");

        Ok(models)
    }

    /// Set the publish flag of a model
    ///
    /// Not scoped: callers authorize the mutation before invoking it.
    pub async fn update_model(
        &self,
        model_id: &ModelId,
        is_published: bool,
    ) -> Result<(), DomainError> {
        let filter = ModelFilter::new().with_model_id(model_id.clone());
        let affected = self
            .repository
            .update_published(&filter, is_published)
            .await?;

        if affected == 0 {
            return Err(not_found(model_id));
        }

        info!(model_id = %model_id, is_published, "Updated model");
        Ok(())
    }

    /// Set the publish flag of a model owned by the given project
    ///
    /// The ownership check and the mutation are a single repository call, so a
    /// model re-created under the same ID in another project is never touched.
    pub async fn update_model_in_project(
        &self,
        model_id: &ModelId,
        project_id: &ProjectId,
        is_published: bool,
    ) -> Result<(), DomainError> {
        let filter = ModelFilter::new()
            .with_model_id(model_id.clone())
            .with_project_id(project_id.clone());
        let affected = self
            .repository
            .update_published(&filter, is_published)
            .await?;

        if affected == 0 {
            return Err(not_found(model_id));
        }

        info!(model_id = %model_id, project_id = %project_id, is_published, "Updated model");
        Ok(())
    }

    /// Permanently delete a model of a project
    pub async fn delete_model(
        &self,
        model_id: &ModelId,
        project_id: &ProjectId,
    ) -> Result<(), DomainError> {
        let filter = ModelFilter::new()
            .with_model_id(model_id.clone())
            .with_project_id(project_id.clone());
        let affected = self.repository.hard_delete(&filter).await?;

        if affected == 0 {
            return Err(not_found(model_id));
        }

        info!(model_id = %model_id, project_id = %project_id, "Deleted model");
        Ok(())
    }

    async fn find_required(
        &self,
        filter: &ModelFilter,
        model_id: &ModelId,
    ) -> Result<Model, DomainError> {
        self.repository
            .find_one(filter)
            .await?
            .ok_or_else(|| not_found(model_id))
    }
}

/// The same message for absent, unpublished and out-of-scope models
fn not_found(model_id: &ModelId) -> DomainError {
    DomainError::not_found(format!("Model '{}' not found", model_id))
}
