//! Domain layer - Core entities, invariants and repository seams

pub mod error;
pub mod hf_repo;
pub mod lifecycle;
pub mod model;
pub mod scope;

pub use error::DomainError;
pub use hf_repo::{HfModelRepo, HfModelRepoRepository, HfRepoName, HfRepoValidationError};
pub use lifecycle::EntityLifecycle;
pub use model::{
    validate_model_id, validate_model_path, Model, ModelFilter, ModelId, ModelRepository,
    ModelSpec, ModelValidationError,
};
pub use scope::{CallerScope, OrganizationId, ProjectId, ScopeValidationError, TenantId};
