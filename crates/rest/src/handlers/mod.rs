//! HTTP request handlers for patron notice policy operations.
//!
//! - [`create`] - Create a policy
//! - [`read`] - Read a policy by ID
//! - [`update`] - Update an existing policy
//! - [`delete`] - Delete one policy or all of a tenant's policies
//! - [`list`] - List a tenant's policies
//! - [`health`] - Health check endpoint

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

pub use create::create_handler;
pub use delete::{delete_all_handler, delete_handler};
pub use health::health_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
