//! In-memory model repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::model::{Model, ModelFilter, ModelRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory model repository
///
/// Useful for testing and development. Data is lost when the process terminates.
/// Models are keyed by model ID, so uniqueness is checked under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryModelRepository {
    models: RwLock<HashMap<String, Model>>,
}

impl InMemoryModelRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with models, soft-deleted ones included
    pub fn with_models(models: Vec<Model>) -> Self {
        let map = models
            .into_iter()
            .map(|m| (m.model_id().as_str().to_string(), m))
            .collect();

        Self {
            models: RwLock::new(map),
        }
    }
}

#[async_trait]
impl ModelRepository for InMemoryModelRepository {
    async fn insert(&self, model: Model) -> Result<Model, DomainError> {
        let key = model.model_id().as_str().to_string();
        let mut models = self.models.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        // Soft-deleted rows still hold their ID, as the unique index does
        if models.contains_key(&key) {
            return Err(DomainError::already_exists(format!(
                "Model '{}' already exists",
                key
            )));
        }

        models.insert(key, model.clone());
        Ok(model)
    }

    async fn find_one(&self, filter: &ModelFilter) -> Result<Option<Model>, DomainError> {
        let models = self.models.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if let Some(model_id) = &filter.model_id {
            return Ok(models
                .get(model_id.as_str())
                .filter(|m| filter.matches(m))
                .cloned());
        }

        Ok(models.values().find(|m| filter.matches(m)).cloned())
    }

    async fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, DomainError> {
        let models = self.models.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(models
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn update_published(
        &self,
        filter: &ModelFilter,
        is_published: bool,
    ) -> Result<u64, DomainError> {
        let mut models = self.models.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut affected = 0;

        for model in models.values_mut().filter(|m| filter.matches(m)) {
            model.set_published(is_published);
            affected += 1;
        }

        Ok(affected)
    }

    async fn hard_delete(&self, filter: &ModelFilter) -> Result<u64, DomainError> {
        let mut models = self.models.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = models.len();
        models.retain(|_, m| !filter.matches_any_state(m));

        Ok((before - models.len()) as u64)
    }
}
