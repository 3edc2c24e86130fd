//! Request and response types for the HTTP API

pub mod error;
pub mod json;
pub mod models;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use models::{
    CreateHfModelRepoRequest, CreateModelRequest, HfModelRepoResponse, ListModelsQuery,
    ModelResponse, ModelsResponse, UpdateModelRequest,
};
