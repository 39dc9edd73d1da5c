//! Ledger connector subsystem.
//!
//! # Data Flow
//! ```text
//! Host
//!     → Connector::new (config → client + identity)
//!     → lifecycle.rs initialize() (bounded liveness check → Ready/Degraded)
//!     → submitter.rs submit()/send_message() (payload → tx id, bounded)
//!     → Result or callback back to the host
//! ```

pub mod lifecycle;
pub mod message;
pub mod submitter;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use lifecycle::Connector;
pub use message::{MetaHeader, OutboundMessage};
pub use types::{ConnectorError, ConnectorResult, ConnectorState, SubmissionResult, BLOCK_NOT_TRACKED};
