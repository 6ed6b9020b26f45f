//! Read handler.
//!
//! `GET /patron-notice-policy-storage/patron-notice-policies/{id}`

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use circulation_persistence::core::PolicyStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::TenantExtractor;
use crate::state::AppState;

/// Handler for reading a policy by id.
///
/// Any id without a stored policy, including ids that are not UUIDs,
/// yields `404` with the body `Not found`.
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    tenant: TenantExtractor,
) -> RestResult<Response>
where
    S: PolicyStorage + Send + Sync,
{
    debug!(id = %id, tenant = %tenant.tenant_id(), "Processing read request");

    let policy = state.storage().read_required(tenant.context(), &id).await?;

    Ok(Json(policy).into_response())
}
