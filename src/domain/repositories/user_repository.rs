//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryUserRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] if the name is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Lists all users, oldest first.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Applies a partial update atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Rejected`] if the new name is already taken.
    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, AppError>;

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
