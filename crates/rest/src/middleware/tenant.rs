//! Tenant identification middleware.
//!
//! Requests name their tenant in the `X-Okapi-Tenant` header and, optionally,
//! the acting user in `X-Okapi-User-Id`. Requests without a tenant header
//! fall back to the default tenant from configuration.

use axum::{
    extract::Request,
    http::{HeaderMap, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Header name for tenant identification.
pub static X_OKAPI_TENANT: HeaderName = HeaderName::from_static("x-okapi-tenant");

/// Header name for the acting user.
pub static X_OKAPI_USER_ID: HeaderName = HeaderName::from_static("x-okapi-user-id");

/// Header name for request correlation.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Reads a header as a non-empty string.
pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Extracts tenant ID from request headers, falling back to `default_tenant`.
pub fn extract_tenant_id(headers: &HeaderMap, default_tenant: &str) -> String {
    header_str(headers, &X_OKAPI_TENANT)
        .unwrap_or(default_tenant)
        .to_string()
}

/// Middleware function that logs the tenant and user of each request.
///
/// This can be used with `axum::middleware::from_fn`.
pub async fn tenant_middleware(request: Request, next: Next) -> Response {
    let headers = request.headers();
    debug!(
        tenant = ?header_str(headers, &X_OKAPI_TENANT),
        user = ?header_str(headers, &X_OKAPI_USER_ID),
        method = %request.method(),
        path = %request.uri().path(),
        "Incoming request"
    );

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_OKAPI_TENANT, HeaderValue::from_static("my-tenant"));

        assert_eq!(extract_tenant_id(&headers, "default"), "my-tenant");
    }

    #[test]
    fn test_extract_missing_uses_default() {
        let headers = HeaderMap::new();
        assert_eq!(extract_tenant_id(&headers, "default"), "default");
    }

    #[test]
    fn test_blank_header_uses_default() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_OKAPI_TENANT, HeaderValue::from_static("  "));

        assert_eq!(extract_tenant_id(&headers, "default"), "default");
    }
}
