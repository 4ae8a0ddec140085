//! Response header middleware.
//!
//! Wraps a router and adds a fixed set of headers to every response it
//! produces. A header the inner service already set is left alone, so when
//! wrappers are nested the innermost value wins.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue,
        header::{self, InvalidHeaderValue},
    },
    middleware::Next,
    response::Response,
};

/// Headers a [`layer`] adds to responses.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders(Arc<HeaderMap>);

impl ResponseHeaders {
    pub fn new(headers: HeaderMap) -> Self {
        Self(Arc::new(headers))
    }

    /// JSON content type, `nosniff`, `no-store` and, when given,
    /// `Access-Control-Allow-Origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if `allow_origin` is not a valid header value.
    pub fn defaults(allow_origin: Option<&str>) -> Result<Self, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        if let Some(origin) = allow_origin {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_str(origin)?,
            );
        }

        Ok(Self::new(headers))
    }

    pub fn with(mut self, name: HeaderName, value: HeaderValue) -> Self {
        Arc::make_mut(&mut self.0).insert(name, value);
        self
    }

    /// Copies every configured header whose name is absent from `target`.
    pub fn apply(&self, target: &mut HeaderMap) {
        for name in self.0.keys() {
            if target.contains_key(name) {
                continue;
            }
            for value in self.0.get_all(name) {
                target.append(name.clone(), value.clone());
            }
        }
    }
}

/// Runs the inner service, then fills in missing headers.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/ping", get(ping))
///     .layer(middleware::from_fn_with_state(
///         ResponseHeaders::defaults(None)?,
///         headers::layer,
///     ));
/// ```
pub async fn layer(State(headers): State<ResponseHeaders>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    headers.apply(response.headers_mut());
    response
}
