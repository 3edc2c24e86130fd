//! Caller scope extraction

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::types::ApiError;
use crate::domain::{CallerScope, DomainError};

pub const TENANT_ID_HEADER: &str = "x-tenant-id";
pub const ORGANIZATION_ID_HEADER: &str = "x-organization-id";
pub const PROJECT_ID_HEADER: &str = "x-project-id";

/// Extractor that requires a resolved caller scope
///
/// Identity is established upstream, which forwards the tenant, organization
/// and project of the caller as headers. A request missing any of them is
/// rejected with 401.
#[derive(Debug, Clone)]
pub struct RequireScope(pub CallerScope);

impl<S> FromRequestParts<S> for RequireScope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scope = extract_scope_from_headers(&parts.headers)?;

        debug!(
            tenant_id = %scope.tenant_id,
            project_id = %scope.project_id,
            "Resolved caller scope"
        );

        Ok(RequireScope(scope))
    }
}

fn extract_scope_from_headers(headers: &HeaderMap) -> Result<CallerScope, ApiError> {
    let tenant_id = header_value(headers, TENANT_ID_HEADER)?;
    let organization_id = header_value(headers, ORGANIZATION_ID_HEADER)?;
    let project_id = header_value(headers, PROJECT_ID_HEADER)?;

    CallerScope::parse(tenant_id, organization_id, project_id)
        .map_err(|e| ApiError::from(DomainError::from(e)))
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ApiError> {
    let value = headers
        .get(name)
        .ok_or_else(|| DomainError::unauthenticated(format!("Missing '{}' header", name)))?;

    value
        .to_str()
        .map(str::trim)
        .map_err(|_| ApiError::bad_request(format!("Invalid '{}' header encoding", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ApiErrorType;
    use axum::http::StatusCode;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, value.parse().unwrap());
        }
        headers
    }

    #[test]
    fn test_extract_scope() {
        let scope = extract_scope_from_headers(&headers(&[
            (TENANT_ID_HEADER, "t0"),
            (ORGANIZATION_ID_HEADER, "o0"),
            (PROJECT_ID_HEADER, " p0 "),
        ]))
        .unwrap();

        assert_eq!(scope.tenant_id.as_str(), "t0");
        assert_eq!(scope.organization_id.as_str(), "o0");
        assert_eq!(scope.project_id.as_str(), "p0");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = extract_scope_from_headers(&headers(&[
            (TENANT_ID_HEADER, "t0"),
            (ORGANIZATION_ID_HEADER, "o0"),
        ]))
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.response.error.error_type, ApiErrorType::AuthenticationError);
        assert!(err.response.error.message.contains(PROJECT_ID_HEADER));
    }

    #[test]
    fn test_blank_header_is_bad_request() {
        let err = extract_scope_from_headers(&headers(&[
            (TENANT_ID_HEADER, "t0"),
            (ORGANIZATION_ID_HEADER, "o0"),
            (PROJECT_ID_HEADER, "   "),
        ]))
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
