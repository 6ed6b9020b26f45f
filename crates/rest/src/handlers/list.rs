//! List handler.
//!
//! `GET /patron-notice-policy-storage/patron-notice-policies`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use circulation_persistence::core::PolicyStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{PageQuery, TenantExtractor};
use crate::responses::PolicyCollection;
use crate::state::AppState;

/// Handler for listing the tenant's policies.
///
/// Returns `{"patronNoticePolicies": [...], "totalRecords": N}` ordered by
/// name. `offset` and `limit` select a window; `totalRecords` always counts
/// every policy of the tenant.
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    tenant: TenantExtractor,
    query: PageQuery,
) -> RestResult<Response>
where
    S: PolicyStorage + Send + Sync,
{
    debug!(
        tenant = %tenant.tenant_id(),
        offset = ?query.offset,
        limit = ?query.limit,
        "Processing list request"
    );

    let page = state
        .storage()
        .list(tenant.context(), query.into_pagination())
        .await?;

    Ok(Json(PolicyCollection::from(page)).into_response())
}
