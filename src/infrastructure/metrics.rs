//! Prometheus recorder for the `metrics` facade.
//!
//! Without an installed recorder every `counter!` call is a no-op.

use anyhow::{Context, Result};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Installs the process-wide Prometheus recorder and returns the handle
/// used to render `GET /metrics`.
///
/// # Errors
///
/// Fails if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    describe_counter!(
        "dispatch_requests_total",
        "Requests dispatched, by resource, action and status"
    );

    Ok(handle)
}
