//! Query-string identifier for read and delete actions.

use serde::Deserialize;
use validator::Validate;

/// `?id=<identifier>`
#[derive(Debug, Deserialize, Validate)]
pub struct ResourceId {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub id: String,
}
