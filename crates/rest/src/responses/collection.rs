//! The list response body.

use circulation_persistence::types::{Page, PatronNoticePolicy};
use serde::{Deserialize, Serialize};

/// `{"patronNoticePolicies": [...], "totalRecords": N}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCollection {
    /// The policies in this page.
    pub patron_notice_policies: Vec<PatronNoticePolicy>,

    /// Number of policies the tenant holds, ignoring paging.
    pub total_records: u64,
}

impl From<Page<PatronNoticePolicy>> for PolicyCollection {
    fn from(page: Page<PatronNoticePolicy>) -> Self {
        Self {
            patron_notice_policies: page.items,
            total_records: page.total,
        }
    }
}
