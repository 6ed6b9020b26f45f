//! PolicyStorage implementation for SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{ErrorCode, OptionalExtension, TransactionBehavior, params};

use crate::core::PolicyStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult, ValidationError};
use crate::tenant::TenantContext;
use crate::types::{NewPolicy, Page, Pagination, PatronNoticePolicy, PolicyUpdate};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

/// Which uniqueness rule a failed write broke.
enum Conflict {
    Name,
    Id,
}

/// Classifies a write failure. The name index and the primary key are the
/// only unique constraints on the table, and SQLite names the violated
/// columns in the message.
fn conflict_of(err: &rusqlite::Error) -> Option<Conflict> {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
            let msg = msg.as_deref().unwrap_or_default();
            if msg.contains("patron_notice_policy.name") {
                Some(Conflict::Name)
            } else {
                Some(Conflict::Id)
            }
        }
        _ => None,
    }
}

fn decode(data: &[u8]) -> StorageResult<PatronNoticePolicy> {
    Ok(serde_json::from_slice(data)?)
}

fn encode(policy: &PatronNoticePolicy) -> StorageResult<Vec<u8>> {
    Ok(serde_json::to_vec(policy)?)
}

#[async_trait]
impl PolicyStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(
        &self,
        tenant: &TenantContext,
        policy: NewPolicy,
    ) -> StorageResult<PatronNoticePolicy> {
        policy.validate()?;

        let conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        let policy = policy.into_policy(tenant, Utc::now());
        let data = encode(&policy)?;
        let created = policy.metadata.created_date.to_rfc3339();
        let updated = policy.metadata.updated_date.to_rfc3339();

        conn.execute(
            "INSERT INTO patron_notice_policy (tenant_id, id, name, data, created_date, updated_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![tenant_id, policy.id, policy.name, data, created, updated],
        )
        .map_err(|e| match conflict_of(&e) {
            Some(Conflict::Name) => StorageError::Validation(ValidationError::DuplicateName {
                name: policy.name.clone(),
            }),
            Some(Conflict::Id) => StorageError::Resource(ResourceError::AlreadyExists {
                id: policy.id.clone(),
            }),
            None => internal_error(format!("Failed to insert policy: {}", e)),
        })?;

        tracing::debug!(
            tenant = %tenant_id,
            id = %policy.id,
            request_id = ?tenant.request_id(),
            "Created patron notice policy"
        );

        Ok(policy)
    }

    async fn read(
        &self,
        tenant: &TenantContext,
        id: &str,
    ) -> StorageResult<Option<PatronNoticePolicy>> {
        let conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        let data: Option<Vec<u8>> = conn
            .query_row(
                "SELECT data FROM patron_notice_policy WHERE tenant_id = ?1 AND id = ?2",
                params![tenant_id, id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read policy: {}", e)))?;

        data.as_deref().map(decode).transpose()
    }

    async fn update(
        &self,
        tenant: &TenantContext,
        id: &str,
        changes: PolicyUpdate,
    ) -> StorageResult<PatronNoticePolicy> {
        changes.validate()?;

        let mut conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        // Immediate so the read and the write below see the same row.
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let data: Option<Vec<u8>> = tx
            .query_row(
                "SELECT data FROM patron_notice_policy WHERE tenant_id = ?1 AND id = ?2",
                params![tenant_id, id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read policy: {}", e)))?;

        let Some(data) = data else {
            return Err(StorageError::Resource(ResourceError::NotFound {
                id: id.to_string(),
            }));
        };

        let mut policy = decode(&data)?;
        changes.apply_to(&mut policy, tenant, Utc::now());

        let data = encode(&policy)?;
        let updated = policy.metadata.updated_date.to_rfc3339();

        tx.execute(
            "UPDATE patron_notice_policy SET name = ?1, data = ?2, updated_date = ?3
             WHERE tenant_id = ?4 AND id = ?5",
            params![policy.name, data, updated, tenant_id, id],
        )
        .map_err(|e| match conflict_of(&e) {
            Some(_) => StorageError::Validation(ValidationError::DuplicateName {
                name: policy.name.clone(),
            }),
            None => internal_error(format!("Failed to update policy: {}", e)),
        })?;

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit update: {}", e)))?;

        tracing::debug!(
            tenant = %tenant_id,
            id = %id,
            request_id = ?tenant.request_id(),
            "Updated patron notice policy"
        );

        Ok(policy)
    }

    async fn delete(&self, tenant: &TenantContext, id: &str) -> StorageResult<()> {
        let conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        let deleted = conn
            .execute(
                "DELETE FROM patron_notice_policy WHERE tenant_id = ?1 AND id = ?2",
                params![tenant_id, id],
            )
            .map_err(|e| internal_error(format!("Failed to delete policy: {}", e)))?;

        if deleted == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound {
                id: id.to_string(),
            }));
        }

        tracing::debug!(
            tenant = %tenant_id,
            id = %id,
            request_id = ?tenant.request_id(),
            "Deleted patron notice policy"
        );

        Ok(())
    }

    async fn delete_all(&self, tenant: &TenantContext) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        let deleted = conn
            .execute(
                "DELETE FROM patron_notice_policy WHERE tenant_id = ?1",
                params![tenant_id],
            )
            .map_err(|e| internal_error(format!("Failed to delete policies: {}", e)))?;

        tracing::debug!(
            tenant = %tenant_id,
            deleted,
            request_id = ?tenant.request_id(),
            "Deleted all patron notice policies"
        );

        Ok(deleted as u64)
    }

    async fn list(
        &self,
        tenant: &TenantContext,
        pagination: Pagination,
    ) -> StorageResult<Page<PatronNoticePolicy>> {
        let mut conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        // One read transaction so the total and the page come from the same
        // snapshot.
        let tx = conn.transaction()?;

        let total: i64 = tx.query_row(
            "SELECT COUNT(*) FROM patron_notice_policy WHERE tenant_id = ?1",
            params![tenant_id],
            |row| row.get(0),
        )?;

        let items = {
            let mut stmt = tx.prepare(
                "SELECT data FROM patron_notice_policy WHERE tenant_id = ?1
                 ORDER BY name, id LIMIT ?2 OFFSET ?3",
            )?;

            let rows = stmt.query_map(
                params![tenant_id, pagination.sql_limit(), pagination.sql_offset()],
                |row| row.get::<_, Vec<u8>>(0),
            )?;

            let mut items = Vec::new();
            for row in rows {
                items.push(decode(&row?)?);
            }
            items
        };

        tx.commit()?;

        tracing::debug!(
            tenant = %tenant_id,
            total,
            returned = items.len(),
            request_id = ?tenant.request_id(),
            "Listed patron notice policies"
        );

        Ok(Page::new(items, total as u64))
    }

    async fn count(&self, tenant: &TenantContext) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let tenant_id = tenant.tenant_id().as_str();

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM patron_notice_policy WHERE tenant_id = ?1",
            params![tenant_id],
            |row| row.get(0),
        )?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tenant::TenantId;

    const MISSING_ID: &str = "0f612a84-dc0f-4670-9017-62981ba63644";

    fn create_test_backend() -> SqliteBackend {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        backend
    }

    fn create_test_tenant() -> TenantContext {
        TenantContext::new(TenantId::new("test-tenant")).with_user_id("user-1")
    }

    #[tokio::test]
    async fn test_create_and_read() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let created = backend
            .create(&tenant, NewPolicy::named("firstPolicy").with_active(true))
            .await
            .unwrap();

        let read = backend.read(&tenant, &created.id).await.unwrap().unwrap();
        assert_eq!(read, created);
        assert_eq!(read.metadata.created_by_user_id.as_deref(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        backend
            .create(&tenant, NewPolicy::named("firstPolicy"))
            .await
            .unwrap();
        let result = backend.create(&tenant, NewPolicy::named("firstPolicy")).await;

        assert!(matches!(
            result,
            Err(StorageError::Validation(ValidationError::DuplicateName { .. }))
        ));
        assert_eq!(backend.count(&tenant).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        backend
            .create(&tenant, NewPolicy::named("a").with_id(MISSING_ID))
            .await
            .unwrap();
        let result = backend
            .create(&tenant, NewPolicy::named("b").with_id(MISSING_ID))
            .await;

        assert!(matches!(
            result,
            Err(StorageError::Resource(ResourceError::AlreadyExists { .. }))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let result = backend.create(&tenant, NewPolicy::named("  ")).await;
        assert!(matches!(result, Err(StorageError::Validation(_))));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        assert!(backend.read(&tenant, MISSING_ID).await.unwrap().is_none());
        assert!(matches!(
            backend.read_required(&tenant, MISSING_ID).await,
            Err(StorageError::Resource(ResourceError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_update() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let created = backend
            .create(&tenant, NewPolicy::named("firstPolicy"))
            .await
            .unwrap();

        let updated = backend
            .update(
                &tenant,
                &created.id,
                PolicyUpdate::default().with_description("updated"),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "firstPolicy");
        assert_eq!(updated.description.as_deref(), Some("updated"));
        assert_eq!(
            updated.metadata.created_date,
            created.metadata.created_date
        );

        let read = backend.read(&tenant, &created.id).await.unwrap().unwrap();
        assert_eq!(read, updated);
    }

    #[tokio::test]
    async fn test_update_keeps_own_name() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let created = backend.create(&tenant, NewPolicy::named("p")).await.unwrap();
        let result = backend
            .update(&tenant, &created.id, PolicyUpdate::default().with_name("p"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_duplicate_name() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        backend
            .create(&tenant, NewPolicy::named("firstPolicy"))
            .await
            .unwrap();
        let second = backend
            .create(&tenant, NewPolicy::named("secondPolicy"))
            .await
            .unwrap();

        let result = backend
            .update(
                &tenant,
                &second.id,
                PolicyUpdate::default().with_name("firstPolicy"),
            )
            .await;
        assert!(matches!(
            result,
            Err(StorageError::Validation(ValidationError::DuplicateName { .. }))
        ));

        let read = backend.read(&tenant, &second.id).await.unwrap().unwrap();
        assert_eq!(read.name, "secondPolicy");
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let result = backend
            .update(&tenant, MISSING_ID, PolicyUpdate::default().with_name("x"))
            .await;
        assert!(matches!(
            result,
            Err(StorageError::Resource(ResourceError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let created = backend.create(&tenant, NewPolicy::named("p")).await.unwrap();
        backend.delete(&tenant, &created.id).await.unwrap();

        assert!(!backend.exists(&tenant, &created.id).await.unwrap());
        assert!(matches!(
            backend.delete(&tenant, &created.id).await,
            Err(StorageError::Resource(ResourceError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_deleted_name_can_be_reused() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        let created = backend.create(&tenant, NewPolicy::named("p")).await.unwrap();
        backend.delete(&tenant, &created.id).await.unwrap();
        assert!(backend.create(&tenant, NewPolicy::named("p")).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_ordered_and_paged() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();

        for name in ["charlie", "alpha", "bravo"] {
            backend.create(&tenant, NewPolicy::named(name)).await.unwrap();
        }

        let all = backend.list(&tenant, Pagination::all()).await.unwrap();
        let names: Vec<_> = all.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "bravo", "charlie"]);
        assert_eq!(all.total, 3);

        let page = backend
            .list(&tenant, Pagination::new(1, 1))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.items[0].name, "bravo");
        assert_eq!(page.total, 3);

        let past_end = backend
            .list(&tenant, Pagination {
                offset: 10,
                limit: None,
            })
            .await
            .unwrap();
        assert!(past_end.is_empty());
        assert_eq!(past_end.total, 3);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();
        let other = TenantContext::new(TenantId::new("other"));

        backend.create(&tenant, NewPolicy::named("a")).await.unwrap();
        backend.create(&tenant, NewPolicy::named("b")).await.unwrap();
        backend.create(&other, NewPolicy::named("a")).await.unwrap();

        assert_eq!(backend.delete_all(&tenant).await.unwrap(), 2);
        assert_eq!(backend.count(&tenant).await.unwrap(), 0);
        assert_eq!(backend.count(&other).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_row_is_serialization_error() {
        let backend = create_test_backend();
        let tenant = create_test_tenant();
        let created = backend
            .create(&tenant, NewPolicy::named("a"))
            .await
            .unwrap();

        backend
            .get_connection()
            .unwrap()
            .execute(
                "UPDATE patron_notice_policy SET data = X'7B' WHERE id = ?1",
                params![created.id],
            )
            .unwrap();

        let read = backend.read(&tenant, &created.id).await;
        assert!(matches!(
            read,
            Err(StorageError::Backend(BackendError::SerializationError { .. }))
        ));

        let list = backend.list(&tenant, Pagination::all()).await;
        assert!(matches!(
            list,
            Err(StorageError::Backend(BackendError::SerializationError { .. }))
        ));
    }

    #[tokio::test]
    async fn test_request_id_does_not_change_stored_record() {
        let backend = create_test_backend();
        let tenant = create_test_tenant().with_request_id("req-7");

        let created = backend
            .create(&tenant, NewPolicy::named("a"))
            .await
            .unwrap();
        let updated = backend
            .update(&tenant, &created.id, PolicyUpdate::default().with_description("d"))
            .await
            .unwrap();

        assert_eq!(tenant.request_id(), Some("req-7"));
        assert_eq!(updated.description.as_deref(), Some("d"));
        assert_eq!(
            backend.list(&tenant, Pagination::all()).await.unwrap().total,
            1
        );
        backend.delete(&tenant, &created.id).await.unwrap();
    }
}
