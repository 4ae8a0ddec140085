//! Use-cases behind `/v1/book/{action}`.

use std::sync::Arc;

use validator::Validate;

use crate::api::dto::book::{BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::api::dto::resource_id::ResourceId;
use crate::api::response::Outcome;
use crate::application::services::BookService;
use crate::error::AppError;

pub async fn create(
    service: Arc<BookService>,
    input: CreateBookRequest,
) -> Result<BookResponse, AppError> {
    input.validate()?;

    let book = service
        .create_book(input.title, input.author, input.description)
        .await?;

    Ok(book.into())
}

pub async fn read(service: Arc<BookService>, input: ResourceId) -> Result<BookResponse, AppError> {
    input.validate()?;

    Ok(service.get_book(&input.id).await?.into())
}

pub async fn update(
    service: Arc<BookService>,
    input: UpdateBookRequest,
) -> Result<BookResponse, AppError> {
    input.validate()?;

    let (id, patch) = input.into_parts();
    Ok(service.update_book(&id, patch).await?.into())
}

pub async fn delete(service: Arc<BookService>, input: ResourceId) -> Result<Outcome, AppError> {
    input.validate()?;

    service.delete_book(&input.id).await?;

    Ok(Outcome::success(format!("book {} deleted", input.id)))
}
