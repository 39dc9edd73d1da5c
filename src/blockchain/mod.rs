//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! LedgerConfig (endpoints, account, asset code)
//!     → identity.rs (fixed issuer/recipient account)
//!     → transaction.rs (payload → createAssets request)
//!     → client.rs (JSON-RPC to the node, failover for liveness only)
//! ```
//!
//! # Constraints
//! - No key material is handled here; the node signs
//! - Connects are bounded by the liveness timeout; each endpoint's liveness
//!   attempt gets an equal share of it before the next endpoint is tried
//! - Submissions carry no client deadline; the connector bounds them
//! - Graceful degradation when the node is unreachable

pub mod client;
pub mod identity;
pub mod transaction;
pub mod types;

pub use client::{BifrostClient, LedgerClient};
pub use identity::Identity;
pub use transaction::TxBuilder;
pub use types::{AssetReceipt, AssetRequest, ChainInfo, RpcError, RpcResult};
