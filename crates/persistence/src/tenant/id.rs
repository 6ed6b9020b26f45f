//! Tenant identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TenantError;

/// An opaque tenant identifier.
///
/// Every row in the store is partitioned by tenant, so two tenants may each
/// hold a policy with the same name.
///
/// # Examples
///
/// ```
/// use circulation_persistence::tenant::TenantId;
///
/// let tenant = TenantId::parse("diku").unwrap();
/// assert_eq!(tenant.as_str(), "diku");
/// assert!(TenantId::parse("no spaces").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a tenant ID without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a tenant ID, rejecting anything but ASCII letters, digits,
    /// `_` and `-`.
    pub fn parse(id: &str) -> Result<Self, TenantError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(TenantError::InvalidTenant {
                tenant_id: Self(id.to_string()),
            })
        }
    }

    /// Returns the tenant ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TenantId({})", self.0)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TenantId {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
