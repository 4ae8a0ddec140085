//! Shared application state.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::api::routes::route_table;
use crate::application::services::{BookService, UserService};
use crate::dispatch::RouteTable;
use crate::domain::repositories::{BookRepository, UserRepository};

/// State cloned into every handler.
///
/// The route table is built once here and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub user_service: Arc<UserService>,
    pub book_service: Arc<BookService>,
    /// Largest request body the dispatcher reads, in bytes.
    pub body_limit: usize,
    /// Renders `GET /metrics`; `None` when no recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        book_repository: Arc<dyn BookRepository>,
        body_limit: usize,
    ) -> Self {
        let user_service = Arc::new(UserService::new(user_repository));
        let book_service = Arc::new(BookService::new(book_repository));
        let routes = Arc::new(route_table(user_service.clone(), book_service.clone()));

        Self {
            routes,
            user_service,
            book_service,
            body_limit,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
