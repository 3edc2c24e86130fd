//! Scope domain - Tenant, organization and project identity of a caller

mod entity;
mod validation;

pub use entity::{CallerScope, OrganizationId, ProjectId, TenantId};
pub use validation::{validate_scope_id, ScopeValidationError, MAX_SCOPE_ID_LENGTH};
