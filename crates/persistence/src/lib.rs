//! Circulation Storage Persistence Layer
//!
//! This crate stores patron notice policies: named, tenant-scoped
//! configuration records that a circulation system uses to decide which
//! notices go to patrons.
//!
//! # Architecture
//!
//! - [`tenant`] - Tenant identifiers and the mandatory request context
//! - [`types`] - The policy record, its create/update shapes and paging
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits
//! - [`backends`] - Backend implementations (SQLite)
//!
//! # Quick Start
//!
//! ```no_run
//! use circulation_persistence::backends::sqlite::SqliteBackend;
//! use circulation_persistence::core::PolicyStorage;
//! use circulation_persistence::tenant::{TenantContext, TenantId};
//! use circulation_persistence::types::NewPolicy;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let tenant = TenantContext::new(TenantId::new("diku"));
//! let policy = backend
//!     .create(&tenant, NewPolicy::named("firstPolicy").with_active(true))
//!     .await?;
//!
//! assert_eq!(backend.read(&tenant, &policy.id).await?, Some(policy));
//! # Ok(())
//! # }
//! ```
//!
//! # Multitenancy
//!
//! All storage operations require a [`TenantContext`](tenant::TenantContext).
//! Records of one tenant are invisible to every other tenant, and name
//! uniqueness is enforced per tenant.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod tenant;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use tenant::{TenantContext, TenantId};
pub use types::{NewPolicy, Page, Pagination, PatronNoticePolicy, PolicyUpdate};

// Re-export core traits
pub use core::{Backend, BackendKind, PolicyStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
