//! Patron notice policy record types.
//!
//! Three shapes of the same entity flow through the store:
//!
//! - [`NewPolicy`] - what a caller submits on create (`id` optional)
//! - [`PolicyUpdate`] - the fields a caller wants to change
//! - [`PatronNoticePolicy`] - the persisted record, always with an `id` and
//!   store-maintained [`Metadata`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::tenant::TenantContext;

/// A persisted patron notice policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronNoticePolicy {
    /// Store-assigned (or caller-supplied) UUID; immutable.
    pub id: String,

    /// Unique (per tenant, case-sensitive) policy name.
    pub name: String,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the policy is in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Creation and modification stamps.
    pub metadata: Metadata,
}

/// Audit metadata maintained by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// When the record was created.
    pub created_date: DateTime<Utc>,

    /// Who created the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<String>,

    /// When the record was last written.
    pub updated_date: DateTime<Utc>,

    /// Who last wrote the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_user_id: Option<String>,
}

impl Metadata {
    fn created(tenant: &TenantContext, now: DateTime<Utc>) -> Self {
        Self {
            created_date: now,
            created_by_user_id: tenant.user_id().map(String::from),
            updated_date: now,
            updated_by_user_id: tenant.user_id().map(String::from),
        }
    }

    fn touch(&mut self, tenant: &TenantContext, now: DateTime<Utc>) {
        self.updated_date = now;
        self.updated_by_user_id = tenant.user_id().map(String::from);
    }
}

/// A policy as submitted for creation.
///
/// Unknown fields (including any client-supplied `metadata`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    /// Optional caller-chosen id; must be a UUID when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Required, non-blank.
    #[serde(default)]
    pub name: String,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the policy is in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl NewPolicy {
    /// Creates a submission with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the caller-chosen id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Checks the submission before it reaches the database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field: "name".to_string(),
            });
        }

        if let Some(id) = &self.id {
            validate_id(id)?;
        }

        Ok(())
    }

    /// Builds the record to persist, assigning a fresh UUID when no id was
    /// supplied.
    pub fn into_policy(self, tenant: &TenantContext, now: DateTime<Utc>) -> PatronNoticePolicy {
        PatronNoticePolicy {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            description: self.description,
            active: self.active,
            metadata: Metadata::created(tenant, now),
        }
    }
}

/// Changes requested by an update.
///
/// Only fields that are present overwrite the stored record. The body `id`
/// is not part of this type; the id always comes from the request path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyUpdate {
    /// New name; must stay unique within the tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New active flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl PolicyUpdate {
    /// Sets the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the new active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// A present name must not be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err(ValidationError::MissingRequiredField {
                field: "name".to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Writes the present fields onto `policy` and refreshes its metadata.
    pub fn apply_to(
        self,
        policy: &mut PatronNoticePolicy,
        tenant: &TenantContext,
        now: DateTime<Utc>,
    ) {
        if let Some(name) = self.name {
            policy.name = name;
        }
        if let Some(description) = self.description {
            policy.description = Some(description);
        }
        if let Some(active) = self.active {
            policy.active = Some(active);
        }
        policy.metadata.touch(tenant, now);
    }
}

/// Policy ids must parse as UUIDs.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidField {
            field: "id".to_string(),
            value: id.to_string(),
            message: "must be a UUID".to_string(),
        })
}
