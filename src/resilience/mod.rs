//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to ledger node:
//!     → timeouts.rs (enforce liveness/submission deadline)
//!     → On expiry: ConnectorError::Timeout, surfaced to the caller
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every ledger call has a deadline
//! - No automatic retries: asset creation is not idempotent, and retrying
//!   initialization is left to the host

pub mod timeouts;

pub use timeouts::with_deadline;
