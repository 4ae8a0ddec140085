//! Use-cases behind `/v1/user/{action}`.
//!
//! Each function receives the input structure the dispatcher decoded for
//! its action and returns the value to serialize on success.

use std::sync::Arc;

use validator::Validate;

use crate::api::dto::resource_id::ResourceId;
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::response::Outcome;
use crate::application::services::UserService;
use crate::error::AppError;

/// `user/create`
///
/// # Errors
///
/// Returns [`AppError::Rejected`] on invalid fields or a duplicate name.
pub async fn create(
    service: Arc<UserService>,
    input: CreateUserRequest,
) -> Result<UserResponse, AppError> {
    input.validate()?;

    let user = service.create_user(input.name, input.age).await?;

    Ok(user.into())
}

/// `user/read?id=...`
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if no user has the identifier.
pub async fn read(service: Arc<UserService>, input: ResourceId) -> Result<UserResponse, AppError> {
    input.validate()?;

    Ok(service.get_user(&input.id).await?.into())
}

/// `user/update`
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the user does not exist.
/// Returns [`AppError::Rejected`] on invalid fields or a duplicate name.
pub async fn update(
    service: Arc<UserService>,
    input: UpdateUserRequest,
) -> Result<UserResponse, AppError> {
    input.validate()?;

    let (id, patch) = input.into_parts();
    Ok(service.update_user(&id, patch).await?.into())
}

/// `user/delete?id=...`
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the user does not exist.
pub async fn delete(service: Arc<UserService>, input: ResourceId) -> Result<Outcome, AppError> {
    input.validate()?;

    service.delete_user(&input.id).await?;

    Ok(Outcome::success(format!("user {} deleted", input.id)))
}
