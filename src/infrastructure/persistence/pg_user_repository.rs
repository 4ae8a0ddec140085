//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use super::transaction::with_transaction;
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

const USER_COLUMNS: &str = "id, name, age, created_at, updated_at";

/// PostgreSQL repository for users.
///
/// Name uniqueness is enforced by the `users_name_key` constraint; its
/// violation surfaces as [`AppError::Rejected`] ("duplicate name").
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, name, age) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        ))
        .bind(&new_user.id)
        .bind(&new_user.name)
        .bind(new_user.age)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let id = id.to_string();

        with_transaction(self.pool.as_ref(), move |conn| {
            Box::pin(async move {
                let current = sqlx::query_as::<_, User>(&format!(
                    "SELECT {USER_COLUMNS} FROM users WHERE id = $1 FOR UPDATE"
                ))
                .bind(&id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| AppError::not_found("user not found"))?;

                let next = current.patched(&patch, Utc::now());

                let updated = sqlx::query_as::<_, User>(&format!(
                    "UPDATE users SET name = $2, age = $3, updated_at = $4 \
                     WHERE id = $1 RETURNING {USER_COLUMNS}"
                ))
                .bind(&next.id)
                .bind(&next.name)
                .bind(next.age)
                .bind(next.updated_at)
                .fetch_one(&mut *conn)
                .await?;

                Ok(updated)
            })
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("user not found"));
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
