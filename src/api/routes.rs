//! Dispatcher routes.
//!
//! The route table is static: every `(resource, action)` pair is bound to
//! one use-case when the server starts and never changes afterwards.

use std::sync::Arc;

use axum::{Router, routing::any};

use crate::api::handlers::{books, dispatch_handler, users};
use crate::application::services::{BookService, UserService};
use crate::dispatch::{Action, ActionHandler, Resource, RouteKey, RouteTable, UseCase};
use crate::state::AppState;

/// Binds every route key to its use-case.
///
/// The `match` is exhaustive, so adding a resource or an action without
/// wiring it fails to compile.
pub fn route_table(users: Arc<UserService>, books: Arc<BookService>) -> RouteTable {
    RouteKey::all()
        .fold(RouteTable::builder(), |builder, key| {
            let source = key.action.input_source();
            let handler: Arc<dyn ActionHandler> = match (key.resource, key.action) {
                (Resource::User, Action::Create) => {
                    UseCase::new(users.clone(), source, users::create)
                }
                (Resource::User, Action::Read) => UseCase::new(users.clone(), source, users::read),
                (Resource::User, Action::Update) => {
                    UseCase::new(users.clone(), source, users::update)
                }
                (Resource::User, Action::Delete) => {
                    UseCase::new(users.clone(), source, users::delete)
                }
                (Resource::Book, Action::Create) => {
                    UseCase::new(books.clone(), source, books::create)
                }
                (Resource::Book, Action::Read) => UseCase::new(books.clone(), source, books::read),
                (Resource::Book, Action::Update) => {
                    UseCase::new(books.clone(), source, books::update)
                }
                (Resource::Book, Action::Delete) => {
                    UseCase::new(books.clone(), source, books::delete)
                }
            };
            builder.route(key, handler)
        })
        .build()
}

/// `/{resource}/{action}` for any HTTP method.
pub fn dispatch_routes() -> Router<AppState> {
    Router::new().route("/{resource}/{action}", any(dispatch_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{InMemoryBookRepository, InMemoryUserRepository};

    #[test]
    fn test_route_table_is_complete() {
        let users = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
        let books = Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new())));

        let table = route_table(users, books);

        assert_eq!(table.len(), Resource::ALL.len() * Action::ALL.len());
        assert!(table.missing().is_empty());
    }
}
