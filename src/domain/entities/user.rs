//! Domain entity representing an API user.

use chrono::{DateTime, Utc};

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: String,
        name: String,
        age: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            age,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy with `patch` applied and `updated_at` set to `now`.
    pub fn patched(&self, patch: &UserPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            age: patch.age.unwrap_or(self.age),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// Input data for creating a user. The identifier is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub age: i32,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
