//! Model domain - Registered model artifacts and their publish state

mod entity;
mod repository;
mod validation;

pub use entity::{Model, ModelId, ModelSpec};
#[cfg(test)]
pub use repository::MockModelRepository;
pub use repository::{ModelFilter, ModelRepository};
pub use validation::{
    validate_model_id, validate_model_path, ModelValidationError, MAX_MODEL_ID_LENGTH,
    MAX_MODEL_PATH_LENGTH,
};
