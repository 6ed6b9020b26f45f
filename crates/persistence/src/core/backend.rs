//! Backend abstraction for database drivers.
//!
//! This module defines the [`Backend`] trait: lifecycle operations (schema
//! initialisation, health checks) that sit beside the data operations of
//! [`PolicyStorage`](super::PolicyStorage).

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Lifecycle operations of a database backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend kind.
    fn kind(&self) -> BackendKind;

    /// Returns the backend name.
    fn name(&self) -> &'static str;

    /// Verifies the backend can serve queries.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Creates tables and indexes. Must be idempotent.
    async fn initialize(&self) -> Result<(), BackendError>;
}
