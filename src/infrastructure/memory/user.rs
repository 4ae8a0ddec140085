//! In-memory user repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// User store backed by a map behind an async `RwLock`.
///
/// Mirrors the PostgreSQL repository: names are unique, updates are
/// applied under the write lock so they are atomic.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
        }
    }
}

fn name_taken(users: &HashMap<String, User>, name: &str, except_id: Option<&str>) -> bool {
    users
        .values()
        .any(|u| u.name == name && Some(u.id.as_str()) != except_id)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        if name_taken(&users, &new_user.name, None) {
            return Err(AppError::rejected("duplicate name"));
        }
        if users.contains_key(&new_user.id) {
            return Err(AppError::rejected("duplicate entry"));
        }

        let now = Utc::now();
        let user = User::new(new_user.id, new_user.name, new_user.age, now, now);
        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(users)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        if let Some(name) = &patch.name
            && name_taken(&users, name, Some(id))
        {
            return Err(AppError::rejected("duplicate name"));
        }

        let current = users
            .get(id)
            .ok_or_else(|| AppError::not_found("user not found"))?;
        let next = current.patched(&patch, Utc::now());
        users.insert(next.id.clone(), next.clone());

        Ok(next)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("user not found"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
