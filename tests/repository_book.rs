//! PostgreSQL book repository tests.
//!
//! Need `DATABASE_URL` pointing at a server where `#[sqlx::test]` can create databases.

use resource_api::AppError;
use resource_api::domain::entities::{BookPatch, NewBook};
use resource_api::domain::repositories::BookRepository;
use resource_api::infrastructure::persistence::PgBookRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_book(id: &str, title: &str) -> NewBook {
    NewBook {
        id: id.to_string(),
        title: title.to_string(),
        author: "Natsume Soseki".to_string(),
        description: Some("novel".to_string()),
    }
}

#[sqlx::test]
async fn test_create_and_find_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let created = repo.create(new_book("b1", "Kokoro")).await.unwrap();

    assert_eq!(created.title, "Kokoro");
    assert_eq!(created.description.as_deref(), Some("novel"));

    let found = repo.find_by_id("b1").await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_books_share_titles(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    repo.create(new_book("b1", "Kokoro")).await.unwrap();
    repo.create(new_book("b2", "Kokoro")).await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[sqlx::test]
async fn test_update_clears_description(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    repo.create(new_book("b1", "Kokoro")).await.unwrap();

    let updated = repo
        .update(
            "b1",
            BookPatch {
                title: Some("Botchan".to_string()),
                description: Some(None),
                ..BookPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Botchan");
    assert_eq!(updated.author, "Natsume Soseki");
    assert!(updated.description.is_none());
}

#[sqlx::test]
async fn test_delete_missing_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    assert!(matches!(
        repo.delete("missing").await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
