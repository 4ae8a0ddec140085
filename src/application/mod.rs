//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the use-cases invoked by
//! the dispatcher.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User lifecycle and name uniqueness
//! - [`services::book_service::BookService`] - Book lifecycle

pub mod services;
