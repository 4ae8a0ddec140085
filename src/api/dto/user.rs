//! DTOs for user actions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{User, UserPatch};

/// Body of `POST /v1/user/create`.
///
/// ```json
/// { "Name": "taro", "Age": 20 }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: i32,
}

/// Body of `POST /v1/user/update`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: Option<i32>,
}

impl UpdateUserRequest {
    pub fn into_parts(self) -> (String, UserPatch) {
        (
            self.id,
            UserPatch {
                name: self.name,
                age: self.age,
            },
        )
    }
}

/// User as returned by read, create and update.
///
/// ```json
/// { "Id": "u1", "Name": "taro", "Age": 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
        }
    }
}
