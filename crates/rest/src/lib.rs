//! # circulation-rest - Patron Notice Policy HTTP API
//!
//! This crate exposes patron notice policies over HTTP. A patron notice
//! policy is a named configuration record; names are unique per tenant.
//!
//! ## Endpoints
//!
//! All policy routes live under
//! `/patron-notice-policy-storage/patron-notice-policies`:
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | POST | `/` | 201 + record + `Location` | 422 duplicate name / invalid record |
//! | GET | `/` | 200 + `{patronNoticePolicies, totalRecords}` | 400 bad paging |
//! | DELETE | `/` | 204 | |
//! | GET | `/{id}` | 200 + record | 404 `Not found` |
//! | PUT | `/{id}` | 204 | 404, 422 |
//! | DELETE | `/{id}` | 204 | 404 |
//!
//! `GET /admin/health` reports whether the database answers.
//!
//! ## Tenancy
//!
//! The tenant comes from the `X-Okapi-Tenant` header, falling back to
//! [`ServerConfig::default_tenant`]. `X-Okapi-User-Id` is recorded in the
//! record metadata.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use circulation_rest::{create_app, ServerConfig};
//! use circulation_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("policies.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8081").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use circulation_persistence::core::{Backend, PolicyStorage};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: PolicyStorage + Backend + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up all routes and the middleware stack (tracing,
/// timeout, optional CORS and request ids).
///
/// # Example
///
/// ```rust,ignore
/// use circulation_rest::{create_app_with_config, ServerConfig};
/// use circulation_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: PolicyStorage + Backend + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        PolicyStorage::backend_name(&storage)
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    let router = router.layer(service_builder);

    // Request ids are assigned outermost so the trace span and handlers see them
    if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "circulation_rest={level},circulation_persistence={level},circulation_storage={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
