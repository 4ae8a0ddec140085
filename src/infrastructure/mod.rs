//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-process repositories
//! - [`metrics`] - Prometheus recorder
//! - [`persistence`] - PostgreSQL repositories, pool setup and transactions

pub mod memory;
pub mod metrics;
pub mod persistence;
