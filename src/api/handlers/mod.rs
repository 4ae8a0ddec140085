//! HTTP request handlers.
//!
//! [`dispatch`] is the single axum entry point for resource actions;
//! [`users`] and [`books`] hold the use-cases it routes to.

pub mod books;
pub mod dispatch;
pub mod health;
pub mod metrics;
pub mod users;

pub use dispatch::{dispatch_handler, not_found_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
