//! Patron notice policy route configuration.

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use circulation_persistence::core::{Backend, PolicyStorage};

use crate::handlers;
use crate::middleware::tenant_middleware;
use crate::state::AppState;

/// Path under which every policy route is mounted.
pub const BASE_PATH: &str = "/patron-notice-policy-storage/patron-notice-policies";

/// Health check path.
pub const HEALTH_PATH: &str = "/admin/health";

/// Creates all routes.
///
/// # Routes
///
/// - `GET /admin/health` - Health check
/// - `POST {BASE_PATH}` - Create
/// - `GET {BASE_PATH}` - List (`offset`, `limit`)
/// - `DELETE {BASE_PATH}` - Delete all of the tenant's policies
/// - `GET {BASE_PATH}/{id}` - Read
/// - `PUT {BASE_PATH}/{id}` - Update
/// - `DELETE {BASE_PATH}/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PolicyStorage + Backend + Send + Sync + 'static,
{
    let body_limit = state.config().max_body_size;
    let instance_path = format!("{}/{{id}}", BASE_PATH);

    Router::new()
        .route(
            BASE_PATH,
            get(handlers::list_handler::<S>)
                .post(handlers::create_handler::<S>)
                .delete(handlers::delete_all_handler::<S>),
        )
        .route(
            &instance_path,
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .route_layer(middleware::from_fn(tenant_middleware))
        .route(HEALTH_PATH, get(handlers::health_handler::<S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

