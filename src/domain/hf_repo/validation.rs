//! HF repository name validation

use std::fmt;

/// Maximum length for repository names
pub const MAX_HF_REPO_NAME_LENGTH: usize = 255;

/// Repository name validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum HfRepoValidationError {
    /// Name is empty
    EmptyName,
    /// Name exceeds maximum length
    NameTooLong { length: usize, max: usize },
    /// Name contains whitespace or control characters
    InvalidName { name: String },
}

impl fmt::Display for HfRepoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Repository name cannot be empty"),
            Self::NameTooLong { length, max } => {
                write!(
                    f,
                    "Repository name too long: {} characters (max {})",
                    length, max
                )
            }
            Self::InvalidName { name } => write!(
                f,
                "Invalid repository name '{}': must not contain whitespace or control characters",
                name.escape_debug()
            ),
        }
    }
}

impl std::error::Error for HfRepoValidationError {}

/// Validate an HF repository name such as `meta-llama/Meta-Llama-3-8B`
pub fn validate_hf_repo_name(name: &str) -> Result<(), HfRepoValidationError> {
    if name.is_empty() {
        return Err(HfRepoValidationError::EmptyName);
    }

    if name.len() > MAX_HF_REPO_NAME_LENGTH {
        return Err(HfRepoValidationError::NameTooLong {
            length: name.len(),
            max: MAX_HF_REPO_NAME_LENGTH,
        });
    }

    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(HfRepoValidationError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(())
}
