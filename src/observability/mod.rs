//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Connector lifecycle and submissions produce:
//!     → logging.rs (structured log events tagged with the connector name)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
