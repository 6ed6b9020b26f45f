//! Core policy storage trait.
//!
//! This module defines the [`PolicyStorage`] trait, which provides the
//! operations the HTTP layer performs on patron notice policies. All
//! operations require a [`TenantContext`] to ensure proper tenant isolation.

use async_trait::async_trait;

use crate::error::{ResourceError, StorageError, StorageResult};
use crate::tenant::TenantContext;
use crate::types::{NewPolicy, Page, Pagination, PatronNoticePolicy, PolicyUpdate};

/// Storage for patron notice policies.
///
/// # Name uniqueness
///
/// Implementations must reject a create or update that would give two
/// records of the same tenant the same `name` with
/// `StorageError::Validation(ValidationError::DuplicateName)`. The check has
/// to be atomic with the write so that concurrent requests cannot both
/// succeed.
///
/// # Example
///
/// ```ignore
/// use circulation_persistence::core::PolicyStorage;
/// use circulation_persistence::tenant::{TenantContext, TenantId};
/// use circulation_persistence::types::{NewPolicy, PolicyUpdate};
///
/// async fn example<S: PolicyStorage>(storage: &S) -> Result<(), StorageError> {
///     let tenant = TenantContext::new(TenantId::new("diku"));
///
///     let created = storage.create(&tenant, NewPolicy::named("firstPolicy")).await?;
///     let changes = PolicyUpdate::default().with_description("sent on checkout");
///     storage.update(&tenant, &created.id, changes).await?;
///
///     storage.delete(&tenant, &created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PolicyStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new policy.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(DuplicateName)` - The name is taken
    /// * `StorageError::Validation(MissingRequiredField | InvalidField)` - Blank name or non-UUID id
    /// * `StorageError::Resource(AlreadyExists)` - The supplied id is taken
    async fn create(
        &self,
        tenant: &TenantContext,
        policy: NewPolicy,
    ) -> StorageResult<PatronNoticePolicy>;

    /// Reads a policy by id, returning `None` if it does not exist.
    async fn read(
        &self,
        tenant: &TenantContext,
        id: &str,
    ) -> StorageResult<Option<PatronNoticePolicy>>;

    /// Applies `changes` to an existing policy.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - No policy with this id
    /// * `StorageError::Validation(DuplicateName)` - The new name belongs to another policy
    async fn update(
        &self,
        tenant: &TenantContext,
        id: &str,
        changes: PolicyUpdate,
    ) -> StorageResult<PatronNoticePolicy>;

    /// Deletes a policy.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - No policy with this id
    async fn delete(&self, tenant: &TenantContext, id: &str) -> StorageResult<()>;

    /// Deletes every policy of the tenant, returning how many were removed.
    async fn delete_all(&self, tenant: &TenantContext) -> StorageResult<u64>;

    /// Lists the tenant's policies ordered by name.
    async fn list(
        &self,
        tenant: &TenantContext,
        pagination: Pagination,
    ) -> StorageResult<Page<PatronNoticePolicy>>;

    /// Counts the tenant's policies.
    async fn count(&self, tenant: &TenantContext) -> StorageResult<u64>;

    /// Checks if a policy exists.
    async fn exists(&self, tenant: &TenantContext, id: &str) -> StorageResult<bool> {
        Ok(self.read(tenant, id).await?.is_some())
    }

    /// Reads a policy, converting absence into `ResourceError::NotFound`.
    async fn read_required(
        &self,
        tenant: &TenantContext,
        id: &str,
    ) -> StorageResult<PatronNoticePolicy> {
        self.read(tenant, id).await?.ok_or_else(|| {
            StorageError::Resource(ResourceError::NotFound { id: id.to_string() })
        })
    }
}
