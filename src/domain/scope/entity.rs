//! Scope identifiers and the resolved caller scope

use serde::{Deserialize, Serialize};

use super::validation::{validate_scope_id, ScopeValidationError};

macro_rules! scope_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier after validation
            pub fn new(id: impl Into<String>) -> Result<Self, ScopeValidationError> {
                let id = id.into();
                validate_scope_id($kind, &id)?;
                Ok(Self(id))
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ScopeValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

scope_id!(
    /// Top-level isolation boundary for a customer
    TenantId,
    "Tenant ID"
);

scope_id!(
    /// Organization within a tenant
    OrganizationId,
    "Organization ID"
);

scope_id!(
    /// Project within a tenant; models are created and queried under a project
    ProjectId,
    "Project ID"
);

/// Identity of the caller, resolved upstream before any scoped operation runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerScope {
    pub tenant_id: TenantId,
    pub organization_id: OrganizationId,
    pub project_id: ProjectId,
}

impl CallerScope {
    pub fn new(
        tenant_id: TenantId,
        organization_id: OrganizationId,
        project_id: ProjectId,
    ) -> Self {
        Self {
            tenant_id,
            organization_id,
            project_id,
        }
    }

    /// Build a scope from raw strings, validating each identifier
    pub fn parse(
        tenant_id: &str,
        organization_id: &str,
        project_id: &str,
    ) -> Result<Self, ScopeValidationError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            organization_id: OrganizationId::new(organization_id)?,
            project_id: ProjectId::new(project_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_valid() {
        let id = ProjectId::new("p1").unwrap();
        assert_eq!(id.as_str(), "p1");
        assert_eq!(id.to_string(), "p1");
    }

    #[test]
    fn test_tenant_id_empty() {
        assert!(TenantId::new("").is_err());
    }

    #[test]
    fn test_caller_scope_parse() {
        let scope = CallerScope::parse("t0", "o0", "p0").unwrap();
        assert_eq!(scope.tenant_id.as_str(), "t0");
        assert_eq!(scope.organization_id.as_str(), "o0");
        assert_eq!(scope.project_id.as_str(), "p0");
    }

    #[test]
    fn test_caller_scope_parse_reports_kind() {
        let err = CallerScope::parse("t0", "", "p0").unwrap_err();
        assert_eq!(err.to_string(), "Organization ID cannot be empty");
    }

    #[test]
    fn test_scope_id_deserialize_validates() {
        let ok: Result<ProjectId, _> = serde_json::from_str("\"p1\"");
        assert!(ok.is_ok());

        let bad: Result<ProjectId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
