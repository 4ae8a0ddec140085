//! Repository trait for book storage.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError>;

    /// Lists all books, oldest first.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Applies a partial update atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    async fn update(&self, id: &str, patch: BookPatch) -> Result<Book, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
