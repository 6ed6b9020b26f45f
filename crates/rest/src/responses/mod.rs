//! Response bodies for the patron notice policy API.
//!
//! - [`errors`] - The `errors` envelope returned with 422 responses
//! - [`collection`] - The list body wrapping policies and `totalRecords`

pub mod collection;
pub mod errors;

pub use collection::PolicyCollection;
pub use errors::{ErrorEntry, ErrorParameter, Errors};
