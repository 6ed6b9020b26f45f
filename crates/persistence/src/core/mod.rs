//! Core storage traits and abstractions.
//!
//! - [`PolicyStorage`] - Create, read, update, delete and list policies
//! - [`Backend`] - Schema initialisation and health checks
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use circulation_persistence::core::PolicyStorage;
//! use circulation_persistence::tenant::TenantContext;
//! use circulation_persistence::types::{NewPolicy, PatronNoticePolicy};
//! use circulation_persistence::error::StorageResult;
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl PolicyStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn create(
//!         &self,
//!         tenant: &TenantContext,
//!         policy: NewPolicy,
//!     ) -> StorageResult<PatronNoticePolicy> {
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod backend;
pub mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::PolicyStorage;
