//! HTTP middleware: response headers and request tracing.

pub mod headers;
pub mod tracing;

pub use headers::ResponseHeaders;
