//! Book management service.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;
use std::sync::Arc;

const BOOK_ID_PREFIX: &str = "b";

/// Use-cases for books.
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_book(
        &self,
        title: String,
        author: String,
        description: Option<String>,
    ) -> Result<Book, AppError> {
        let new_book = NewBook {
            id: generate_id(BOOK_ID_PREFIX)?,
            title,
            author,
            description,
        };

        let book = self.repository.create(new_book).await?;
        tracing::info!(book_id = %book.id, "book created");

        Ok(book)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    pub async fn get_book(&self, id: &str) -> Result<Book, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("book not found"))
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    pub async fn update_book(&self, id: &str, patch: BookPatch) -> Result<Book, AppError> {
        self.repository.update(id, patch).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    pub async fn delete_book(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(book_id = %id, "book deleted");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBookRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_book_assigns_id() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_book| new_book.id.starts_with("b_") && new_book.title == "Kokoro")
            .times(1)
            .returning(|new_book| {
                Ok(Book {
                    id: new_book.id,
                    title: new_book.title,
                    author: new_book.author,
                    description: new_book.description,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = BookService::new(Arc::new(mock_repo));

        let book = service
            .create_book("Kokoro".to_string(), "Natsume Soseki".to_string(), None)
            .await
            .unwrap();

        assert!(book.id.starts_with("b_"));
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(mock_repo));

        let result = service.get_book("b404").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_health_check_reports_ping_failure() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(AppError::internal("connection refused")));

        let service = BookService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.health_check().await.unwrap_err(),
            AppError::Internal { .. }
        ));
    }
}
