//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual,
        expected,
        "Expected status {}, got {}: {}",
        expected,
        actual,
        response.text()
    );
}

/// Asserts a 404 with the fixed `Not found` body.
pub fn assert_not_found(response: &TestResponse) {
    assert_status(response, 404);
    assert_eq!(response.text(), "Not found");
}

/// Asserts a 422 errors envelope whose first error carries `code`, and
/// returns that error.
pub fn assert_error_code(response: &TestResponse, code: &str) -> Value {
    assert_status(response, 422);

    let body: Value = response.json();
    let errors = body["errors"]
        .as_array()
        .unwrap_or_else(|| panic!("Expected errors array, got {}", body));
    assert!(!errors.is_empty(), "Expected at least one error");

    let first = errors[0].clone();
    assert_eq!(first["code"], code, "Unexpected error: {}", first);
    assert!(
        first["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected a message: {}",
        first
    );
    first
}

/// Returns the `name` of every policy in a list response.
pub fn policy_names(body: &Value) -> Vec<String> {
    body["patronNoticePolicies"]
        .as_array()
        .map(|policies| {
            policies
                .iter()
                .filter_map(|p| p["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
