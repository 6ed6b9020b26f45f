//! Health check endpoint handler.
//!
//! Provides a health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use circulation_persistence::core::{Backend, PolicyStorage};
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the backend's own health check (a trivial query), so a broken
/// database is reported as unhealthy.
///
/// # HTTP Request
///
/// `GET [base]/admin/health`
///
/// # Response
///
/// - `200 OK` - Server and database are healthy
/// - `503 Service Unavailable` - The database check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: PolicyStorage + Backend + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = Backend::name(state.storage());

    match state.storage().health_check().await {
        Ok(()) => {
            let body = serde_json::json!({
                "status": "healthy",
                "backend": backend_name,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "backend": backend_name,
                "error": e.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
