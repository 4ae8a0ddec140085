//! Business logic services for the application layer.

pub mod book_service;
pub mod user_service;

pub use book_service::BookService;
pub use user_service::UserService;
