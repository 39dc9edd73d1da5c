//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the connector.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Account used as issuer and recipient when no account is configured.
pub const DEFAULT_ACCOUNT: &str = "6sYyiTguyQ455w2dGEaNbrwkAWAEYV1Zk6FtZMknWDKQ";

/// Asset code attached to every payload-carrying transaction by default.
pub const DEFAULT_ASSET_CODE: &str = "PeaceCredit";

/// Root configuration for the connector.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Ledger node connection and transaction parameters.
    pub ledger: LedgerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Ledger node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Human-readable connector name, used to tag logs and metrics.
    pub name: String,

    /// JSON-RPC base URL of the ledger node (e.g., "http://node:9085/").
    pub endpoint: String,

    /// Endpoints tried in order when the primary does not answer the liveness query.
    #[serde(default)]
    pub failover_endpoints: Vec<String>,

    /// Optional API key sent as `x-api-key`.
    pub api_key: Option<String>,

    /// Account used as both issuer and recipient.
    pub account: String,

    /// Asset code of the payload-carrying transfer.
    pub asset_code: String,

    /// Liveness query deadline in milliseconds.
    pub liveness_timeout_ms: u64,

    /// Submission deadline in milliseconds.
    pub submit_timeout_ms: u64,

    /// Route of the chain-info method, relative to the endpoint.
    pub chain_route: String,

    /// Route of the asset methods, relative to the endpoint.
    pub asset_route: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl LedgerConfig {
    pub fn liveness_timeout(&self) -> Duration {
        Duration::from_millis(self.liveness_timeout_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    /// Primary endpoint followed by the failover endpoints.
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.endpoint.as_str())
            .chain(self.failover_endpoints.iter().map(String::as_str))
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            name: "bifrost".to_string(),
            endpoint: "http://localhost:9085/".to_string(),
            failover_endpoints: Vec::new(),
            api_key: None,
            account: DEFAULT_ACCOUNT.to_string(),
            asset_code: DEFAULT_ASSET_CODE.to_string(),
            liveness_timeout_ms: 10_000,
            submit_timeout_ms: 30_000,
            chain_route: "topl/".to_string(),
            asset_route: "asset/".to_string(),
            system_proxy: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
