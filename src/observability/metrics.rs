//! Metrics collection and exposition.
//!
//! # Metrics
//! - `connector_init_total` (counter): liveness checks by connector, outcome
//! - `connector_ready` (gauge): 1=ready, 0=degraded
//! - `connector_submissions_total` (counter): submissions by connector, outcome
//! - `connector_submission_duration_seconds` (histogram): submission latency
//!
//! Recording is a no-op until a recorder is installed, so library users that
//! never call `init_metrics` pay nothing.

use std::net::SocketAddr;
use std::time::Duration;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::connector::types::ConnectorError;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_init(connector: &str, ready: bool) {
    let outcome = if ready { "ready" } else { "degraded" };
    counter!("connector_init_total", "connector" => connector.to_string(), "outcome" => outcome)
        .increment(1);
    gauge!("connector_ready", "connector" => connector.to_string()).set(if ready { 1.0 } else { 0.0 });
}

pub fn record_submission<T>(connector: &str, result: &Result<T, ConnectorError>, elapsed: Duration) {
    counter!(
        "connector_submissions_total",
        "connector" => connector.to_string(),
        "outcome" => submission_outcome(result)
    )
    .increment(1);
    histogram!("connector_submission_duration_seconds", "connector" => connector.to_string())
        .record(elapsed.as_secs_f64());
}

/// Label for a submission outcome.
pub fn submission_outcome<T>(result: &Result<T, ConnectorError>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(e) if e.is_timeout() => "timeout",
        Err(_) => "rejected",
    }
}
