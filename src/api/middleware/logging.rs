//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use super::scope::{PROJECT_ID_HEADER, TENANT_ID_HEADER};

/// Log each request with its route, caller scope, status and duration
///
/// Runs inside `TraceLayer`, so it records events on the existing request
/// span rather than opening a new one.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = header_or(request.headers(), "x-request-id", "-");
    let tenant_id = header_or(request.headers(), TENANT_ID_HEADER, "-");
    let project_id = header_or(request.headers(), PROJECT_ID_HEADER, "-");

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            tenant_id = %tenant_id,
            project_id = %project_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            tenant_id = %tenant_id,
            project_id = %project_id,
            "Request completed"
        );
    }

    response
}

/// Route template when matched, so IDs do not explode log cardinality
fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn header_or(headers: &HeaderMap, name: &str, default: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(default)
        .to_string()
}
