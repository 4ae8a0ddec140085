//! HTTP layer of the dispatcher.
//!
//! # Modules
//!
//! - [`dto`] - Request/response structures decoded and encoded by use-cases
//! - [`handlers`] - The dispatcher entry point and the use-cases behind it
//! - [`middleware`] - Response headers and request tracing
//! - [`response`] - JSON writing with a plain-text fallback
//! - [`routes`] - Route table wiring

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
