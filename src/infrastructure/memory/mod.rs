//! In-process repository implementations.
//!
//! Used when `STORAGE_BACKEND=memory` and by the HTTP integration tests.
//! Data lives for the lifetime of the process.

pub mod book;
pub mod user;

pub use book::InMemoryBookRepository;
pub use user::InMemoryUserRepository;
