//! Server configuration for the patron notice policy API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CIRC_SERVER_PORT` | 8081 | Server port |
//! | `CIRC_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `CIRC_LOG_LEVEL` | info | Log level |
//! | `CIRC_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `CIRC_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CIRC_ENABLE_CORS` | true | Enable CORS |
//! | `CIRC_CORS_ORIGINS` | * | Allowed origins |
//! | `CIRC_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `CIRC_CORS_HEADERS` | Content-Type,Accept,X-Okapi-Tenant,X-Okapi-User-Id,X-Request-Id | Allowed headers |
//! | `CIRC_DEFAULT_TENANT` | diku | Tenant for requests without `X-Okapi-Tenant` |
//! | `CIRC_BASE_URL` | http://localhost:8081 | Base URL used in `Location` headers |
//! | `CIRC_DATABASE_PATH` | (in-memory) | SQLite database file |
//! | `CIRC_DB_MAX_CONNECTIONS` | 10 | SQLite pool size |
//! | `CIRC_ENABLE_REQUEST_ID` | true | Generate and echo `X-Request-Id` |
//!
//! # Example
//!
//! ```rust
//! use circulation_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the patron notice policy API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "circulation-storage")]
#[command(about = "Patron notice policy storage server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CIRC_SERVER_PORT", default_value = "8081")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CIRC_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CIRC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CIRC_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "CIRC_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CIRC_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CIRC_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "CIRC_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "CIRC_CORS_HEADERS",
        default_value = "Content-Type,Accept,X-Okapi-Tenant,X-Okapi-User-Id,X-Request-Id"
    )]
    pub cors_headers: String,

    /// Default tenant ID for requests without an X-Okapi-Tenant header.
    #[arg(long, env = "CIRC_DEFAULT_TENANT", default_value = "diku")]
    pub default_tenant: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "CIRC_BASE_URL", default_value = "http://localhost:8081")]
    pub base_url: String,

    /// SQLite database file. An in-memory database is used when absent.
    #[arg(long, env = "CIRC_DATABASE_PATH")]
    pub database_path: Option<String>,

    /// Maximum number of pooled SQLite connections.
    #[arg(long, env = "CIRC_DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: u32,

    /// Enable request ID tracking.
    #[arg(long, env = "CIRC_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept,X-Okapi-Tenant,X-Okapi-User-Id,X-Request-Id"
                .to_string(),
            default_tenant: "diku".to_string(),
            base_url: "http://localhost:8081".to_string(),
            database_path: None,
            db_max_connections: 10,
            enable_request_id: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["circulation-storage"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.db_max_connections == 0 {
            errors.push("Database pool size cannot be 0".to_string());
        }

        if circulation_persistence::tenant::TenantId::parse(&self.default_tenant).is_err() {
            errors.push(format!(
                "Default tenant '{}' may only contain letters, digits, '_' and '-'",
                self.default_tenant
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            default_tenant: "test-tenant".to_string(),
            base_url: "http://localhost:8081".to_string(),
            database_path: None,
            db_max_connections: 1,
            enable_request_id: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_tenant, "diku");
        assert!(config.database_path.is_none());
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = ServerConfig {
            max_body_size: 0,
            default_tenant: "not a tenant".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("tenant")));
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "circulation-storage",
            "--port",
            "9130",
            "--database-path",
            "/tmp/policies.db",
        ])
        .unwrap();
        assert_eq!(config.port, 9130);
        assert_eq!(config.database_path.as_deref(), Some("/tmp/policies.db"));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.default_tenant, "test-tenant");
    }
}
