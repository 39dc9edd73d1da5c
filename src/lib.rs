//! Bifrost ledger connector.
//!
//! Lets a messaging host put opaque encoded payloads on a Topl Bifrost ledger
//! without knowing anything about the ledger itself.

pub mod blockchain;
pub mod config;
pub mod connector;
pub mod observability;
pub mod resilience;

pub use config::ConnectorConfig;
pub use connector::{Connector, ConnectorError, ConnectorResult, ConnectorState, SubmissionResult};
