//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, wires services into the route table and
//! runs the Axum server until Ctrl-C.

use crate::api::middleware::ResponseHeaders;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{BookRepository, UserRepository};
use crate::infrastructure::memory::{InMemoryBookRepository, InMemoryUserRepository};
use crate::infrastructure::metrics;
use crate::infrastructure::persistence::{self, PgBookRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Repositories for one storage backend plus the pool to close on shutdown.
struct Storage {
    users: Arc<dyn UserRepository>,
    books: Arc<dyn BookRepository>,
    pool: Option<PgPool>,
}

async fn open_storage(config: &Config) -> Result<Storage> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = persistence::connect(config).await?;
            tracing::info!("Connected to database");

            persistence::migrate(&pool).await?;
            tracing::info!("Migrations applied");

            let shared = Arc::new(pool.clone());
            Ok(Storage {
                users: Arc::new(PgUserRepository::new(shared.clone())),
                books: Arc::new(PgBookRepository::new(shared)),
                pool: Some(pool),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Storage {
                users: Arc::new(InMemoryUserRepository::new()),
                books: Arc::new(InMemoryBookRepository::new()),
                pool: None,
            })
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The metrics recorder cannot be installed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = open_storage(&config).await?;

    let state = AppState::new(storage.users, storage.books, config.max_body_bytes)
        .with_metrics(metrics::install_recorder()?);
    tracing::info!("Route table ready with {} routes", state.routes.len());

    let response_headers = ResponseHeaders::defaults(config.allow_origin.as_deref())
        .context("Invalid ALLOW_ORIGIN")?;
    let app = app_router(state, response_headers, &config.api_prefix);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = storage.pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    Ok(())
}
