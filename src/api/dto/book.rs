//! DTOs for book actions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, BookPatch};

/// Body of `POST /v1/book/create`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub author: String,

    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
}

/// Body of `POST /v1/book/update`.
///
/// # `Description` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the description
/// - **String** → set new description
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub author: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<Option<String>>,
}

impl UpdateBookRequest {
    pub fn into_parts(self) -> (String, BookPatch) {
        (
            self.id,
            BookPatch {
                title: self.title,
                author: self.author,
                description: self.description,
            },
        )
    }
}

/// Book as returned by read, create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
        }
    }
}
