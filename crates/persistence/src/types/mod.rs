//! Core types for stored policies and listings.
//!
//! - [`PatronNoticePolicy`] - A persisted policy with its [`Metadata`]
//! - [`NewPolicy`] / [`PolicyUpdate`] - Create and update payloads
//! - [`Pagination`] / [`Page`] - Offset paging for listings

mod pagination;
mod policy;

pub use pagination::{Page, Pagination};
pub use policy::{Metadata, NewPolicy, PatronNoticePolicy, PolicyUpdate, validate_id};
