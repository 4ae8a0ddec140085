//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence` (PostgreSQL) and
//! `crate::infrastructure::memory` (in-process). Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod book_repository;
pub mod user_repository;

pub use book_repository::BookRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
