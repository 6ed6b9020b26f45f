//! Tenant context extractor.
//!
//! Extracts tenant information from request headers and creates
//! a TenantContext for use in handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use circulation_persistence::tenant::{TenantContext, TenantId};

use crate::error::RestError;
use crate::middleware::tenant::{X_OKAPI_USER_ID, X_REQUEST_ID, extract_tenant_id, header_str};
use crate::state::AppState;

/// Axum extractor for tenant context.
///
/// Reads the tenant from `X-Okapi-Tenant` (or the configured default), the
/// acting user from `X-Okapi-User-Id` and the correlation id from
/// `X-Request-Id`. Malformed tenant ids are rejected with 400.
///
/// # Example
///
/// ```rust,ignore
/// use circulation_rest::extractors::TenantExtractor;
///
/// async fn handler(tenant: TenantExtractor) {
///     println!("Tenant ID: {}", tenant.tenant_id());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TenantExtractor {
    context: TenantContext,
}

impl TenantExtractor {
    /// Creates a new TenantExtractor with the given tenant ID.
    pub fn new(tenant_id: &str) -> Self {
        Self {
            context: TenantContext::new(TenantId::new(tenant_id)),
        }
    }

    /// Returns a reference to the tenant context.
    pub fn context(&self) -> &TenantContext {
        &self.context
    }

    /// Returns the tenant ID as a string.
    pub fn tenant_id(&self) -> &str {
        self.context.tenant_id().as_str()
    }

    /// Consumes the extractor and returns the tenant context.
    pub fn into_context(self) -> TenantContext {
        self.context
    }
}

impl std::fmt::Display for TenantExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tenant_id())
    }
}

impl<S> FromRequestParts<AppState<S>> for TenantExtractor
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let tenant_id = extract_tenant_id(&parts.headers, state.default_tenant());
        let tenant_id = TenantId::parse(&tenant_id)?;

        let mut context = TenantContext::new(tenant_id);
        if let Some(user_id) = header_str(&parts.headers, &X_OKAPI_USER_ID) {
            context = context.with_user_id(user_id);
        }
        if let Some(request_id) = header_str(&parts.headers, &X_REQUEST_ID) {
            context = context.with_request_id(request_id);
        }

        Ok(Self { context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::{HeaderName, HeaderValue, Request};
    use circulation_persistence::backends::sqlite::SqliteBackend;

    use crate::config::ServerConfig;
    use crate::middleware::tenant::X_OKAPI_TENANT;

    fn state() -> AppState<SqliteBackend> {
        AppState::new(
            Arc::new(SqliteBackend::in_memory().unwrap()),
            ServerConfig::for_testing(),
        )
    }

    async fn extract(
        headers: &[(&HeaderName, &'static str)],
    ) -> Result<TenantExtractor, RestError> {
        let mut request = Request::builder().uri("/");
        for (name, value) in headers {
            request = request.header(*name, HeaderValue::from_static(value));
        }
        let (mut parts, _) = request.body(()).unwrap().into_parts();
        TenantExtractor::from_request_parts(&mut parts, &state()).await
    }

    #[test]
    fn test_new() {
        let extractor = TenantExtractor::new("test-tenant");
        assert_eq!(extractor.tenant_id(), "test-tenant");
        assert_eq!(extractor.to_string(), "test-tenant");
    }

    #[tokio::test]
    async fn test_missing_header_uses_default_tenant() {
        let extractor = extract(&[]).await.unwrap();
        assert_eq!(extractor.tenant_id(), "test-tenant");
        assert!(extractor.context().user_id().is_none());
    }

    #[tokio::test]
    async fn test_reads_tenant_and_user() {
        let extractor = extract(&[
            (&X_OKAPI_TENANT, "diku"),
            (&X_OKAPI_USER_ID, "user-1"),
        ])
        .await
        .unwrap();

        assert_eq!(extractor.tenant_id(), "diku");
        assert_eq!(extractor.into_context().user_id(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_invalid_tenant_rejected() {
        let result = extract(&[(&X_OKAPI_TENANT, "bad/tenant")]).await;
        assert!(matches!(result, Err(RestError::BadRequest { .. })));
    }
}
