#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use resource_api::api::middleware::ResponseHeaders;
use resource_api::domain::entities::User;
use resource_api::infrastructure::memory::{InMemoryBookRepository, InMemoryUserRepository};
use resource_api::routes::router;
use resource_api::state::AppState;
use std::sync::Arc;

pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn user(id: &str, name: &str, age: i32) -> User {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    User::new(id.to_string(), name.to_string(), age, at, at)
}

/// State over the in-memory backend, seeded with `users`.
pub fn memory_state(users: Vec<User>, body_limit: usize) -> AppState {
    AppState::new(
        Arc::new(InMemoryUserRepository::with_users(users)),
        Arc::new(InMemoryBookRepository::new()),
        body_limit,
    )
}

pub fn server_for(state: AppState) -> TestServer {
    let headers = ResponseHeaders::defaults(Some("https://app.example")).unwrap();
    TestServer::new(router(state, headers, "/v1")).unwrap()
}

pub fn test_server(users: Vec<User>) -> TestServer {
    server_for(memory_state(users, BODY_LIMIT))
}
