//! Static route table.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Uri, response::Response};

use super::RouteKey;
use crate::error::AppError;

/// The parts of an inbound request a handler may consume.
pub struct Inbound {
    pub uri: Uri,
    pub body: Body,
    /// Maximum number of body bytes the handler may buffer.
    pub body_limit: usize,
}

/// A dispatch target. Produces exactly one response per call.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(&self, inbound: Inbound) -> Response;
}

/// Immutable mapping from [`RouteKey`] to handler.
///
/// Built once at startup and shared behind an `Arc`.
pub struct RouteTable {
    handlers: HashMap<RouteKey, Arc<dyn ActionHandler>>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Returns the handler registered for `key`, if any.
    pub fn get(&self, key: RouteKey) -> Option<&Arc<dyn ActionHandler>> {
        self.handlers.get(&key)
    }

    /// Runs the handler registered for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no handler is registered; nothing
    /// is invoked in that case.
    pub async fn dispatch(&self, key: RouteKey, inbound: Inbound) -> Result<Response, AppError> {
        let handler = self
            .get(key)
            .ok_or_else(|| AppError::not_found(format!("no handler for {key}")))?;

        Ok(handler.handle(inbound).await)
    }

    /// Keys without a handler, in declaration order.
    pub fn missing(&self) -> Vec<RouteKey> {
        RouteKey::all()
            .filter(|key| !self.handlers.contains_key(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[derive(Default)]
pub struct RouteTableBuilder {
    handlers: HashMap<RouteKey, Arc<dyn ActionHandler>>,
}

impl RouteTableBuilder {
    /// Registers `handler` for `key`, replacing any earlier registration.
    pub fn route(mut self, key: RouteKey, handler: Arc<dyn ActionHandler>) -> Self {
        self.handlers.insert(key, handler);
        self
    }

    pub fn build(self) -> RouteTable {
        RouteTable {
            handlers: self.handlers,
        }
    }
}
