//! Error types for the patron notice policy API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to HTTP responses.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to HTTP status codes
//! and response bodies:
//!
//! | Storage Error | HTTP Status | Body |
//! |--------------|-------------|------|
//! | NotFound | 404 | `Not found` (text) |
//! | DuplicateName | 422 | errors envelope, `duplicate.name` |
//! | AlreadyExists | 422 | errors envelope, `duplicate.id` |
//! | MissingRequiredField / InvalidField | 422 | errors envelope, `validation.error` |
//! | InvalidTenant | 400 | text |
//! | BackendError | 500 | text |

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use circulation_persistence::error::{
    BackendError, ResourceError, StorageError, TenantError, ValidationError,
};
use std::fmt;

use crate::responses::errors::{
    DUPLICATE_ID, DUPLICATE_NAME, ErrorEntry, Errors, VALIDATION_ERROR,
};

/// Body of every 404 response.
pub const NOT_FOUND_TEXT: &str = "Not found";

/// REST API error type.
///
/// Each variant maps to one HTTP status code. Record-level problems (422)
/// are rendered as an errors envelope; everything else is plain text.
#[derive(Debug)]
pub enum RestError {
    /// No policy with this id exists for the tenant (404).
    NotFound {
        /// The requested id.
        id: String,
    },

    /// Another policy of the tenant already uses this name (422).
    DuplicateName {
        /// The contested name.
        name: String,
    },

    /// A policy with the caller-supplied id already exists (422).
    DuplicateId {
        /// The contested id.
        id: String,
    },

    /// A field is missing or malformed (422).
    InvalidField {
        /// Field name.
        field: String,
        /// Submitted value (empty when missing).
        value: String,
        /// What is wrong with it.
        message: String,
    },

    /// Malformed request: bad JSON, bad query parameters, bad tenant (400).
    BadRequest {
        /// Description of the problem.
        message: String,
    },

    /// Request body is not JSON (415).
    UnsupportedMediaType {
        /// The Content-Type that was sent.
        content_type: String,
    },

    /// Request body exceeds the configured limit (413).
    PayloadTooLarge {
        /// Description of the problem.
        message: String,
    },

    /// Storage failure (500).
    InternalError {
        /// Description of the failure.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => {
                write!(f, "Patron notice policy not found: {}", id)
            }
            RestError::DuplicateName { name } => {
                write!(
                    f,
                    "Patron notice policy with name '{}' already exists",
                    name
                )
            }
            RestError::DuplicateId { id } => {
                write!(f, "Patron notice policy with id '{}' already exists", id)
            }
            RestError::InvalidField { field, message, .. } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::PayloadTooLarge { message } => {
                write!(f, "Payload too large: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::DuplicateName { .. }
            | RestError::DuplicateId { .. }
            | RestError::InvalidField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the errors envelope for record-level failures.
    fn error_entry(&self) -> Option<ErrorEntry> {
        match self {
            RestError::DuplicateName { name } => Some(
                ErrorEntry::new(DUPLICATE_NAME, self.to_string()).with_parameter("name", name),
            ),
            RestError::DuplicateId { id } => {
                Some(ErrorEntry::new(DUPLICATE_ID, self.to_string()).with_parameter("id", id))
            }
            RestError::InvalidField { field, value, .. } => Some(
                ErrorEntry::new(VALIDATION_ERROR, self.to_string())
                    .with_parameter(field, value),
            ),
            _ => None,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Some(entry) = self.error_entry() {
            return (status, Json(Errors::single(entry))).into_response();
        }

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = match &self {
            RestError::NotFound { .. } => NOT_FOUND_TEXT.to_string(),
            other => other.to_string(),
        };

        (
            status,
            [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.as_ref())],
            body,
        )
            .into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Tenant(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { id } => RestError::NotFound { id },
            ResourceError::AlreadyExists { id } => RestError::DuplicateId { id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::DuplicateName { name } => RestError::DuplicateName { name },
            ValidationError::MissingRequiredField { field } => RestError::InvalidField {
                field,
                value: String::new(),
                message: "may not be blank".to_string(),
            },
            ValidationError::InvalidField {
                field,
                value,
                message,
            } => RestError::InvalidField {
                field,
                value,
                message,
            },
        }
    }
}

impl From<TenantError> for RestError {
    fn from(err: TenantError) -> Self {
        match err {
            TenantError::InvalidTenant { .. } => RestError::BadRequest {
                message: err.to_string(),
            },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
