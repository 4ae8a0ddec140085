//! User management service.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;
use std::sync::Arc;

/// Prefix of generated user identifiers.
const USER_ID_PREFIX: &str = "u";

/// Use-cases for users.
///
/// Enforces the business rules on top of the repository:
/// - User names are unique
/// - Identifiers are generated here, never accepted from the caller
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] ("duplicate name") if the name is taken.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_user(&self, name: String, age: i32) -> Result<User, AppError> {
        if self.repository.find_by_name(&name).await?.is_some() {
            return Err(AppError::rejected("duplicate name"));
        }

        let new_user = NewUser {
            id: generate_id(USER_ID_PREFIX)?,
            name,
            age,
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = %user.id, "user created");

        Ok(user)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Applies a partial update.
    ///
    /// An empty patch is a read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Rejected`] if the new name belongs to another user.
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        if patch.is_empty() {
            return self.get_user(id).await;
        }

        if let Some(name) = &patch.name
            && let Some(holder) = self.repository.find_by_name(name).await?
            && holder.id != id
        {
            return Err(AppError::rejected("duplicate name"));
        }

        self.repository.update(id, patch).await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// Checks storage connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
