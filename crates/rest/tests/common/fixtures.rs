//! Test fixtures for REST API testing.
//!
//! Provides policy request bodies for use in tests.

use serde_json::{Value, json};

/// An id that is never created by any test.
pub const UNKNOWN_ID: &str = "0f612a84-dc0f-4670-9017-62981ba63644";

/// Builder for a patron notice policy request body.
#[derive(Debug, Clone, Default)]
pub struct PolicyFixture {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    active: Option<bool>,
}

impl PolicyFixture {
    /// A policy with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// A body without a name.
    pub fn nameless() -> Self {
        Self::default()
    }

    /// Sets the id.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Renders the JSON body.
    pub fn to_json(&self) -> Value {
        let mut body = json!({});
        if let Some(id) = &self.id {
            body["id"] = json!(id);
        }
        if let Some(name) = &self.name {
            body["name"] = json!(name);
        }
        if let Some(description) = &self.description {
            body["description"] = json!(description);
        }
        if let Some(active) = self.active {
            body["active"] = json!(active);
        }
        body
    }
}

/// The two policies most tests start from.
pub fn first_and_second() -> (Value, Value) {
    (
        PolicyFixture::named("firstPolicy")
            .with_description("sample policy")
            .with_active(true)
            .to_json(),
        PolicyFixture::named("secondPolicy").with_active(false).to_json(),
    )
}
