//! Tenant management for multi-tenant policy storage.
//!
//! - [`TenantId`] - Validated tenant identifier
//! - [`TenantContext`] - Required by every storage operation
//!
//! Tenants share one table; every row carries a `tenant_id` column and all
//! queries filter on it.

mod context;
mod id;

pub use context::TenantContext;
pub use id::TenantId;
