//! HTTP middleware for the patron notice policy API.
//!
//! - [`tenant`] - Tenant and user identification headers

pub mod tenant;

pub use tenant::{X_OKAPI_TENANT, X_OKAPI_USER_ID, tenant_middleware};
