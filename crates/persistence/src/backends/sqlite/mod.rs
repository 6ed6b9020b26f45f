//! SQLite backend implementation.
//!
//! This module provides the SQLite implementation of [`PolicyStorage`] and
//! [`Backend`]. It supports both in-memory databases (used by the test
//! suites and the default server configuration) and file-based databases.
//!
//! [`PolicyStorage`]: crate::core::PolicyStorage
//! [`Backend`]: crate::core::Backend
//!
//! # Example
//!
//! ```no_run
//! use circulation_persistence::backends::sqlite::SqliteBackend;
//! use circulation_persistence::tenant::{TenantContext, TenantId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Initialize the schema
//! backend.init_schema()?;
//!
//! // Every operation is scoped to a tenant
//! let tenant = TenantContext::new(TenantId::new("diku"));
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE patron_notice_policy (
//!     tenant_id TEXT NOT NULL,
//!     id TEXT NOT NULL,
//!     name TEXT NOT NULL,
//!     data BLOB NOT NULL,  -- JSON record
//!     created_date TEXT NOT NULL,
//!     updated_date TEXT NOT NULL,
//!     PRIMARY KEY (tenant_id, id)
//! );
//!
//! CREATE UNIQUE INDEX idx_patron_notice_policy_name
//!     ON patron_notice_policy(tenant_id, name);
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
