//! Update handler.
//!
//! `PUT /patron-notice-policy-storage/patron-notice-policies/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use circulation_persistence::core::PolicyStorage;
use circulation_persistence::types::PolicyUpdate;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{PolicyJson, TenantExtractor};
use crate::state::AppState;

/// Handler for updating a policy.
///
/// Only the fields present in the body change. An `id` in the body is
/// ignored; the path id identifies the record.
///
/// # Response
///
/// - `204 No Content` - Updated
/// - `404 Not Found` - No policy with this id
/// - `422 Unprocessable Entity` - The new name belongs to another policy, or is blank
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    tenant: TenantExtractor,
    PolicyJson(changes): PolicyJson<PolicyUpdate>,
) -> RestResult<Response>
where
    S: PolicyStorage + Send + Sync,
{
    debug!(id = %id, tenant = %tenant.tenant_id(), "Processing update request");

    state
        .storage()
        .update(tenant.context(), &id, changes)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
