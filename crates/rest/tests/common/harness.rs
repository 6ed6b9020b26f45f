//! REST API test harness.
//!
//! Provides infrastructure for testing the REST API endpoints.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestRequest, TestServer};
use circulation_persistence::backends::sqlite::SqliteBackend;
use serde_json::Value;

use circulation_rest::routing::{BASE_PATH, create_routes};
use circulation_rest::{AppState, ServerConfig};

/// Tenant used by the harness unless a test picks another one.
pub const TEST_TENANT: &str = "test-tenant";

const X_OKAPI_TENANT: HeaderName = HeaderName::from_static("x-okapi-tenant");

/// Test harness for REST API testing.
///
/// Provides a test server over a fresh in-memory SQLite backend.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = PolicyTestHarness::new();
///
///     let response = harness.create(&PolicyFixture::named("p").to_json()).await;
///     let id = response.json::<Value>()["id"].as_str().unwrap().to_string();
///
///     harness.get(&id).await.assert_status_ok();
/// }
/// ```
pub struct PolicyTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<SqliteBackend>,

    /// Tenant sent with every request.
    pub tenant: String,
}

impl PolicyTestHarness {
    /// Creates a harness with the testing configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        let backend = Arc::new(backend);

        let state = AppState::new(Arc::clone(&backend), config);
        let server = TestServer::new(create_routes(state)).expect("Failed to create test server");

        Self {
            server,
            backend,
            tenant: TEST_TENANT.to_string(),
        }
    }

    /// Returns a harness sharing this server but sending another tenant.
    pub fn as_tenant(&self, tenant: &str) -> TenantView<'_> {
        TenantView {
            server: &self.server,
            tenant: tenant.to_string(),
        }
    }

    fn view(&self) -> TenantView<'_> {
        self.as_tenant(&self.tenant)
    }

    /// `POST` a policy.
    pub async fn create(&self, body: &Value) -> axum_test::TestResponse {
        self.view().create(body).await
    }

    /// `POST` a policy and return its id, asserting 201.
    pub async fn create_ok(&self, body: &Value) -> String {
        self.view().create_ok(body).await
    }

    /// `GET` a policy.
    pub async fn get(&self, id: &str) -> axum_test::TestResponse {
        self.view().get(id).await
    }

    /// `PUT` a policy.
    pub async fn update(&self, id: &str, body: &Value) -> axum_test::TestResponse {
        self.view().update(id, body).await
    }

    /// `DELETE` a policy.
    pub async fn delete(&self, id: &str) -> axum_test::TestResponse {
        self.view().delete(id).await
    }

    /// `GET` the collection with an optional query string.
    pub async fn list(&self, query: &str) -> axum_test::TestResponse {
        self.view().list(query).await
    }

    /// `DELETE` the whole collection.
    pub async fn delete_all(&self) -> axum_test::TestResponse {
        self.view().delete_all().await
    }
}

/// Requests sent on behalf of one tenant.
pub struct TenantView<'a> {
    server: &'a TestServer,
    tenant: String,
}

impl TenantView<'_> {
    fn with_tenant(&self, request: TestRequest) -> TestRequest {
        request.add_header(
            X_OKAPI_TENANT,
            HeaderValue::from_str(&self.tenant).expect("Invalid tenant header"),
        )
    }

    /// `POST` a policy.
    pub async fn create(&self, body: &Value) -> axum_test::TestResponse {
        self.with_tenant(self.server.post(BASE_PATH)).json(body).await
    }

    /// `POST` a policy and return its id, asserting 201.
    pub async fn create_ok(&self, body: &Value) -> String {
        let response = self.create(body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_str()
            .expect("Created policy has no id")
            .to_string()
    }

    /// `GET` a policy.
    pub async fn get(&self, id: &str) -> axum_test::TestResponse {
        self.with_tenant(self.server.get(&format!("{}/{}", BASE_PATH, id)))
            .await
    }

    /// `PUT` a policy.
    pub async fn update(&self, id: &str, body: &Value) -> axum_test::TestResponse {
        self.with_tenant(self.server.put(&format!("{}/{}", BASE_PATH, id)))
            .json(body)
            .await
    }

    /// `DELETE` a policy.
    pub async fn delete(&self, id: &str) -> axum_test::TestResponse {
        self.with_tenant(self.server.delete(&format!("{}/{}", BASE_PATH, id)))
            .await
    }

    /// `GET` the collection with an optional query string.
    pub async fn list(&self, query: &str) -> axum_test::TestResponse {
        self.with_tenant(self.server.get(&format!("{}{}", BASE_PATH, query)))
            .await
    }

    /// `DELETE` the whole collection.
    pub async fn delete_all(&self) -> axum_test::TestResponse {
        self.with_tenant(self.server.delete(BASE_PATH)).await
    }
}
