//! Model validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for model IDs
pub const MAX_MODEL_ID_LENGTH: usize = 255;

/// Maximum length for artifact paths
pub const MAX_MODEL_PATH_LENGTH: usize = 2048;

/// Model IDs look like `google-gemma-2b-it` or `ft:meta-llama/Llama-3-8B:job-1`
static MODEL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._:/\-_]*$").unwrap());

/// Model validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// Model ID is empty
    EmptyId,
    /// Model ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// Model ID contains invalid characters
    InvalidIdFormat { id: String },
    /// Artifact path is empty
    EmptyPath,
    /// Artifact path exceeds maximum length
    PathTooLong { length: usize, max: usize },
}

impl fmt::Display for ModelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Model ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "Model ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid model ID format '{}': must start with a letter or digit and contain only letters, digits, '.', '_', ':', '/' or '-'",
                    id
                )
            }
            Self::EmptyPath => write!(f, "Model path cannot be empty"),
            Self::PathTooLong { length, max } => {
                write!(f, "Model path too long: {} characters (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for ModelValidationError {}

/// Validate a model ID
pub fn validate_model_id(id: &str) -> Result<(), ModelValidationError> {
    if id.is_empty() {
        return Err(ModelValidationError::EmptyId);
    }

    if id.len() > MAX_MODEL_ID_LENGTH {
        return Err(ModelValidationError::IdTooLong {
            length: id.len(),
            max: MAX_MODEL_ID_LENGTH,
        });
    }

    if !MODEL_ID_PATTERN.is_match(id) {
        return Err(ModelValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

/// Validate a model artifact path
///
/// The path is opaque to the registry; only emptiness and length are checked.
pub fn validate_model_path(path: &str) -> Result<(), ModelValidationError> {
    if path.trim().is_empty() {
        return Err(ModelValidationError::EmptyPath);
    }

    if path.len() > MAX_MODEL_PATH_LENGTH {
        return Err(ModelValidationError::PathTooLong {
            length: path.len(),
            max: MAX_MODEL_PATH_LENGTH,
        });
    }

    Ok(())
}
