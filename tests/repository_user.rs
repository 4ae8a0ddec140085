//! PostgreSQL user repository tests.
//!
//! Need `DATABASE_URL` pointing at a server where `#[sqlx::test]` can create databases.

use resource_api::AppError;
use resource_api::domain::entities::{NewUser, UserPatch};
use resource_api::domain::repositories::UserRepository;
use resource_api::infrastructure::persistence::{PgUserRepository, with_transaction};
use sqlx::PgPool;
use std::sync::Arc;

fn new_user(id: &str, name: &str, age: i32) -> NewUser {
    NewUser {
        id: id.to_string(),
        name: name.to_string(),
        age,
    }
}

#[sqlx::test]
async fn test_create_and_find_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("u1", "taro", 20)).await.unwrap();

    assert_eq!(created.id, "u1");
    assert_eq!(created.name, "taro");

    let found = repo.find_by_id("u1").await.unwrap().unwrap();
    assert_eq!(found, created);

    let by_name = repo.find_by_name("taro").await.unwrap();
    assert_eq!(by_name.map(|u| u.id), Some("u1".to_string()));

    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_name_is_rejected(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("u1", "taro", 20)).await.unwrap();
    let result = repo.create(new_user("u2", "taro", 30)).await;

    match result {
        Err(AppError::Rejected { message }) => assert_eq!(message, "duplicate name"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_update_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("u1", "taro", 20)).await.unwrap();

    let updated = repo
        .update(
            "u1",
            UserPatch {
                name: None,
                age: Some(21),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "taro");
    assert_eq!(updated.age, 21);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_missing_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.update("missing", UserPatch::default()).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_delete_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("u1", "taro", 20)).await.unwrap();

    repo.delete("u1").await.unwrap();

    assert!(repo.find_by_id("u1").await.unwrap().is_none());
    assert!(matches!(
        repo.delete("u1").await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
async fn test_list_users_in_creation_order(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("u1", "taro", 20)).await.unwrap();
    repo.create(new_user("u2", "jiro", 18)).await.unwrap();

    let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|u| u.id).collect();

    assert_eq!(ids, vec!["u1", "u2"]);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_transaction_commits_on_success(pool: PgPool) {
    with_transaction(&pool, |conn| {
        Box::pin(async move {
            sqlx::query("INSERT INTO users (id, name, age) VALUES ('u1', 'taro', 20)")
                .execute(&mut *conn)
                .await?;
            Ok(())
        })
    })
    .await
    .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_transaction_rolls_back_on_error(pool: PgPool) {
    let result: Result<(), AppError> = with_transaction(&pool, |conn| {
        Box::pin(async move {
            sqlx::query("INSERT INTO users (id, name, age) VALUES ('u1', 'taro', 20)")
                .execute(&mut *conn)
                .await?;
            Err(AppError::rejected("abort"))
        })
    })
    .await;

    assert!(matches!(result, Err(AppError::Rejected { .. })));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
