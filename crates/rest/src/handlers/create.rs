//! Create handler.
//!
//! `POST /patron-notice-policy-storage/patron-notice-policies`

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use circulation_persistence::core::PolicyStorage;
use circulation_persistence::types::NewPolicy;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{PolicyJson, TenantExtractor};
use crate::routing::BASE_PATH;
use crate::state::AppState;

/// Handler for creating a policy.
///
/// # HTTP Request
///
/// `POST [base]/patron-notice-policy-storage/patron-notice-policies`
///
/// # Response
///
/// - `201 Created` - The stored policy, with a `Location` header
/// - `400 Bad Request` - Malformed JSON or tenant
/// - `422 Unprocessable Entity` - Duplicate name or id, blank name, non-UUID id
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    tenant: TenantExtractor,
    PolicyJson(policy): PolicyJson<NewPolicy>,
) -> RestResult<Response>
where
    S: PolicyStorage + Send + Sync,
{
    debug!(
        tenant = %tenant.tenant_id(),
        name = %policy.name,
        "Processing create request"
    );

    let stored = state.storage().create(tenant.context(), policy).await?;

    let location = format!("{}{}/{}", state.base_url(), BASE_PATH, stored.id);
    let location = HeaderValue::from_str(&location).map_err(|e| RestError::InternalError {
        message: format!("Invalid Location header: {}", e),
    })?;

    debug!(id = %stored.id, "Patron notice policy created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(stored),
    )
        .into_response())
}
