//! Delete handlers.
//!
//! - `DELETE /patron-notice-policy-storage/patron-notice-policies/{id}`
//! - `DELETE /patron-notice-policy-storage/patron-notice-policies`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use circulation_persistence::core::PolicyStorage;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::TenantExtractor;
use crate::state::AppState;

/// Handler for deleting one policy: `204`, or `404` if it does not exist.
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    tenant: TenantExtractor,
) -> RestResult<Response>
where
    S: PolicyStorage + Send + Sync,
{
    debug!(id = %id, tenant = %tenant.tenant_id(), "Processing delete request");

    state.storage().delete(tenant.context(), &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for deleting every policy of the tenant. Always `204`.
pub async fn delete_all_handler<S>(
    State(state): State<AppState<S>>,
    tenant: TenantExtractor,
) -> RestResult<Response>
where
    S: PolicyStorage + Send + Sync,
{
    let deleted = state.storage().delete_all(tenant.context()).await?;

    info!(tenant = %tenant.tenant_id(), deleted, "Deleted all patron notice policies");

    Ok(StatusCode::NO_CONTENT.into_response())
}
