//! JSON body extractor.
//!
//! Like `axum::Json`, but rejections are rendered as [`RestError`] so that
//! malformed bodies get the same plain-text 400 as every other bad request.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// A deserialized JSON request body.
#[derive(Debug)]
pub struct PolicyJson<T>(pub T);

impl<T> PolicyJson<T> {
    /// Consumes the extractor and returns the body.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Accepts `application/json` and any `+json` media type. A missing
/// Content-Type is treated as JSON.
fn is_json(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };

    match content_type.parse::<mime::Mime>() {
        Ok(mime) => {
            mime.subtype() == mime::JSON || mime.suffix().is_some_and(|s| s == mime::JSON)
        }
        Err(_) => false,
    }
}

impl<S, T> FromRequest<S> for PolicyJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Must own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if !is_json(content_type.as_deref()) {
            return Err(RestError::UnsupportedMediaType {
                content_type: content_type.unwrap_or_default(),
            });
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                RestError::PayloadTooLarge {
                    message: e.body_text(),
                }
            } else {
                RestError::BadRequest {
                    message: e.body_text(),
                }
            }
        })?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(PolicyJson(value))
    }
}
