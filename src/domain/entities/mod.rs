//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and partial updates:
//! - `NewUser`, `NewBook` - For creating new records
//! - `UserPatch`, `BookPatch` - For partial updates

pub mod book;
pub mod user;

pub use book::{Book, BookPatch, NewBook};
pub use user::{NewUser, User, UserPatch};
