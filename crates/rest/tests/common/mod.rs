//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server wired to an in-memory SQLite backend
//! - [`fixtures`] - Policy request bodies
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
