//! Tenant context for storage operations.
//!
//! Every storage operation takes a [`TenantContext`], so a policy can never
//! be read or written without naming the tenant it belongs to.

use super::id::TenantId;

/// The tenant (and optionally the acting user) a storage operation runs for.
///
/// ```
/// use circulation_persistence::tenant::{TenantContext, TenantId};
///
/// let ctx = TenantContext::new(TenantId::new("diku"))
///     .with_user_id("9eb67301-6f6e-468f-ae1d-6e4b7ff8f4b7");
/// assert_eq!(ctx.tenant_id().as_str(), "diku");
/// assert!(ctx.user_id().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TenantContext {
    tenant_id: TenantId,
    /// Recorded in record metadata as the creating/updating user.
    user_id: Option<String>,
    /// Optional request ID for tracing.
    request_id: Option<String>,
}

impl TenantContext {
    /// Creates a new tenant context.
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            user_id: None,
            request_id: None,
        }
    }

    /// Creates a context with the specified user ID for auditing.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Creates a context with the specified request ID for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns the user ID, if set.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns the request ID, if set.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
