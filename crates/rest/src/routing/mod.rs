//! Route configuration for the patron notice policy API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod policy_routes;

pub use policy_routes::{BASE_PATH, HEALTH_PATH, create_routes};
