//! Pagination extractor.
//!
//! Extracts the optional `offset` and `limit` query parameters of the list
//! endpoint.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use circulation_persistence::types::Pagination;
use serde::Deserialize;

use crate::error::RestError;

/// `?offset=N&limit=M` on the list endpoint. Both are optional; without
/// `limit` every record from `offset` on is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    /// Records to skip.
    pub offset: Option<usize>,

    /// Maximum records to return.
    pub limit: Option<usize>,
}

impl PageQuery {
    /// Converts to the storage paging window.
    pub fn into_pagination(self) -> Pagination {
        Pagination {
            offset: self.offset.unwrap_or(0),
            limit: self.limit,
        }
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: format!("Invalid paging parameters: {}", e.body_text()),
            })?;

        Ok(query)
    }
}
