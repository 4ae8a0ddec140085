//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use super::transaction::with_transaction;
use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

const BOOK_COLUMNS: &str = "id, title, author, description, created_at, updated_at";

/// PostgreSQL repository for books.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (id, title, author, description) \
             VALUES ($1, $2, $3, $4) RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&new_book.id)
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(&new_book.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(book)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(books)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> Result<Book, AppError> {
        let id = id.to_string();

        with_transaction(self.pool.as_ref(), move |conn| {
            Box::pin(async move {
                let current = sqlx::query_as::<_, Book>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1 FOR UPDATE"
                ))
                .bind(&id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| AppError::not_found("book not found"))?;

                let next = current.patched(&patch, Utc::now());

                let updated = sqlx::query_as::<_, Book>(&format!(
                    "UPDATE books SET title = $2, author = $3, description = $4, updated_at = $5 \
                     WHERE id = $1 RETURNING {BOOK_COLUMNS}"
                ))
                .bind(&next.id)
                .bind(&next.title)
                .bind(&next.author)
                .bind(&next.description)
                .bind(next.updated_at)
                .fetch_one(&mut *conn)
                .await?;

                Ok(updated)
            })
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("book not found"));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
