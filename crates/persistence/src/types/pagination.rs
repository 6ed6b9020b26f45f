//! Offset pagination for policy listings.

use serde::{Deserialize, Serialize};

/// Window into the ordered set of a tenant's policies.
///
/// `limit: None` means "everything from `offset` on".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records to skip.
    #[serde(default)]
    pub offset: usize,

    /// Maximum number of records to return.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Pagination {
    /// Every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// A page of at most `limit` records starting at `offset`.
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    /// The SQL `LIMIT` value; a negative limit means "no limit" in SQLite.
    pub fn sql_limit(&self) -> i64 {
        self.limit
            .map(|l| i64::try_from(l).unwrap_or(i64::MAX))
            .unwrap_or(-1)
    }

    /// The SQL `OFFSET` value.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

/// One page of results together with the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records in this page.
    pub items: Vec<T>,

    /// Total number of records, independent of paging.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Number of records in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
