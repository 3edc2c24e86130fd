//! Scope identifier validation

use std::fmt;

/// Maximum length for tenant, organization and project IDs
pub const MAX_SCOPE_ID_LENGTH: usize = 255;

/// Scope identifier validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeValidationError {
    /// Identifier is empty
    Empty { kind: &'static str },
    /// Identifier exceeds maximum length
    TooLong {
        kind: &'static str,
        length: usize,
        max: usize,
    },
    /// Identifier contains whitespace or control characters
    InvalidCharacters { kind: &'static str, id: String },
}

impl fmt::Display for ScopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { kind } => write!(f, "{} cannot be empty", kind),
            Self::TooLong { kind, length, max } => {
                write!(f, "{} too long: {} characters (max {})", kind, length, max)
            }
            Self::InvalidCharacters { kind, id } => {
                write!(
                    f,
                    "Invalid {} '{}': must not contain whitespace or control characters",
                    kind,
                    id.escape_debug()
                )
            }
        }
    }
}

impl std::error::Error for ScopeValidationError {}

/// Validate a scope identifier of the given kind (e.g. "Tenant ID")
pub fn validate_scope_id(kind: &'static str, id: &str) -> Result<(), ScopeValidationError> {
    if id.is_empty() {
        return Err(ScopeValidationError::Empty { kind });
    }

    if id.len() > MAX_SCOPE_ID_LENGTH {
        return Err(ScopeValidationError::TooLong {
            kind,
            length: id.len(),
            max: MAX_SCOPE_ID_LENGTH,
        });
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ScopeValidationError::InvalidCharacters {
            kind,
            id: id.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scope_ids() {
        assert!(validate_scope_id("Project ID", "p1").is_ok());
        assert!(validate_scope_id("Tenant ID", "tenant-0").is_ok());
        assert!(validate_scope_id("Organization ID", "org_7f3a").is_ok());
    }

    #[test]
    fn test_empty_scope_id() {
        assert_eq!(
            validate_scope_id("Project ID", ""),
            Err(ScopeValidationError::Empty { kind: "Project ID" })
        );
    }

    #[test]
    fn test_scope_id_too_long() {
        let id = "a".repeat(MAX_SCOPE_ID_LENGTH + 1);
        assert!(matches!(
            validate_scope_id("Tenant ID", &id),
            Err(ScopeValidationError::TooLong { length: 256, .. })
        ));
    }

    #[test]
    fn test_scope_id_whitespace() {
        let result = validate_scope_id("Project ID", "my project");
        assert!(matches!(
            result,
            Err(ScopeValidationError::InvalidCharacters { .. })
        ));
        assert!(result.unwrap_err().to_string().contains("my project"));
    }
}
