//! Data Transfer Objects for API requests and responses.
//!
//! Request and response field names are PascalCase on the wire. Input DTOs
//! derive `validator::Validate`; validation runs inside the use-case, never
//! in the body mapper.

pub mod book;
pub mod health;
pub mod resource_id;
pub mod user;
