//! Domain entity representing a book.

use chrono::{DateTime, Utc};

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Returns a copy with `patch` applied and `updated_at` set to `now`.
    pub fn patched(&self, patch: &BookPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            author: patch.author.clone().unwrap_or_else(|| self.author.clone()),
            description: match &patch.description {
                Some(value) => value.clone(),
                None => self.description.clone(),
            },
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// Input data for creating a book. The identifier is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

/// Partial update.
///
/// `description` distinguishes "leave unchanged" (`None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        let now = Utc::now();
        Book {
            id: "b1".to_string(),
            title: "Kokoro".to_string(),
            author: "Natsume Soseki".to_string(),
            description: Some("novel".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_patch_clears_description() {
        let book = sample();
        let patched = book.patched(
            &BookPatch {
                description: Some(None),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(patched.title, "Kokoro");
        assert!(patched.description.is_none());
    }

    #[test]
    fn test_patch_keeps_description_when_absent() {
        let book = sample();
        let patched = book.patched(
            &BookPatch {
                title: Some("Botchan".to_string()),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(patched.title, "Botchan");
        assert_eq!(patched.description.as_deref(), Some("novel"));
    }
}
