//! Adapter turning a typed use-case function into an [`ActionHandler`].

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use super::body::{read_json, read_query};
use super::{ActionHandler, Inbound, InputSource};
use crate::api::response;
use crate::error::AppError;

/// Handler that decodes input `I`, calls `call(service, input)` and writes
/// the output `O` or the error.
///
/// The decode target is fixed by the type parameter, so the payload can
/// never choose which structure it is decoded into. The use-case is not
/// called when decoding fails.
pub struct UseCase<S, I, O, F> {
    service: Arc<S>,
    source: InputSource,
    call: F,
    _io: PhantomData<fn(I) -> O>,
}

impl<S, I, O, F, Fut> UseCase<S, I, O, F>
where
    S: Send + Sync + 'static,
    I: DeserializeOwned + Send + 'static,
    O: Serialize + Send + 'static,
    F: Fn(Arc<S>, I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, AppError>> + Send + 'static,
{
    pub fn new(service: Arc<S>, source: InputSource, call: F) -> Arc<Self> {
        Arc::new(Self {
            service,
            source,
            call,
            _io: PhantomData,
        })
    }

    /// Input decoded from the JSON body.
    pub fn body(service: Arc<S>, call: F) -> Arc<Self> {
        Self::new(service, InputSource::Body, call)
    }

    /// Input decoded from the query string.
    pub fn query(service: Arc<S>, call: F) -> Arc<Self> {
        Self::new(service, InputSource::Query, call)
    }

    async fn decode(&self, inbound: Inbound) -> Result<I, AppError> {
        match self.source {
            InputSource::Body => read_json(inbound.body, inbound.body_limit).await,
            InputSource::Query => read_query(&inbound.uri),
        }
    }
}

#[async_trait]
impl<S, I, O, F, Fut> ActionHandler for UseCase<S, I, O, F>
where
    S: Send + Sync + 'static,
    I: DeserializeOwned + Send + 'static,
    O: Serialize + Send + 'static,
    F: Fn(Arc<S>, I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, AppError>> + Send + 'static,
{
    async fn handle(&self, inbound: Inbound) -> Response {
        let input = match self.decode(inbound).await {
            Ok(input) => input,
            Err(e) => return e.into_response(),
        };

        match (self.call)(self.service.clone(), input).await {
            Ok(output) => response::json(StatusCode::OK, &output),
            Err(e) => e.into_response(),
        }
    }
}
