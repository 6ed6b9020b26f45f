//! The `errors` envelope.
//!
//! Record-level failures (duplicate name, invalid field) are reported as
//!
//! ```json
//! {
//!   "errors": [{
//!     "message": "Patron notice policy with this name already exists",
//!     "type": "1",
//!     "code": "duplicate.name",
//!     "parameters": [{"key": "name", "value": "firstPolicy"}]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Code for a name already used by another policy of the tenant.
pub const DUPLICATE_NAME: &str = "duplicate.name";

/// Code for a caller-supplied id that is already taken.
pub const DUPLICATE_ID: &str = "duplicate.id";

/// Code for a missing or malformed field.
pub const VALIDATION_ERROR: &str = "validation.error";

/// A list of record-level errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Errors {
    /// The individual errors; never empty when sent.
    pub errors: Vec<ErrorEntry>,
}

impl Errors {
    /// An envelope holding one error.
    pub fn single(entry: ErrorEntry) -> Self {
        Self {
            errors: vec![entry],
        }
    }
}

/// One record-level error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Human-readable description.
    pub message: String,

    /// Error category; always `"1"`.
    #[serde(rename = "type")]
    pub error_type: String,

    /// Machine-readable code such as `duplicate.name`.
    pub code: String,

    /// The offending fields and their values.
    pub parameters: Vec<ErrorParameter>,
}

impl ErrorEntry {
    /// Creates an entry with no parameters.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_type: "1".to_string(),
            code: code.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds a key/value parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(ErrorParameter {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// A field named by an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorParameter {
    /// Field name.
    pub key: String,

    /// Submitted value.
    pub value: String,
}
