//! In-memory book repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let mut books = self.books.write().await;

        if books.contains_key(&new_book.id) {
            return Err(AppError::rejected("duplicate entry"));
        }

        let now = Utc::now();
        let book = Book {
            id: new_book.id,
            title: new_book.title,
            author: new_book.author,
            description: new_book.description,
            created_at: now,
            updated_at: now,
        };
        books.insert(book.id.clone(), book.clone());

        Ok(book)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let mut books: Vec<Book> = self.books.read().await.values().cloned().collect();
        books.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(books)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> Result<Book, AppError> {
        let mut books = self.books.write().await;

        let current = books
            .get(id)
            .ok_or_else(|| AppError::not_found("book not found"))?;
        let next = current.patched(&patch, Utc::now());
        books.insert(next.id.clone(), next.clone());

        Ok(next)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.books
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("book not found"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
