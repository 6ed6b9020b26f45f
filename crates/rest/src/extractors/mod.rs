//! Axum extractors for the patron notice policy API.
//!
//! - [`TenantExtractor`] - Extract tenant context from request headers
//! - [`PolicyJson`] - Extract a JSON request body
//! - [`PageQuery`] - Extract `offset` / `limit` query parameters

mod json;
mod pagination;
mod tenant;

pub use json::PolicyJson;
pub use pagination::PageQuery;
pub use tenant::TenantExtractor;
