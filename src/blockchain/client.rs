//! Ledger node RPC client.
//!
//! # Responsibilities
//! - Speak JSON-RPC 2.0 over HTTP to a Bifrost node
//! - Query chain metadata (liveness) with failover across endpoints
//! - Submit `createAssets` requests to the endpoint that answered liveness
//! - Classify transport, HTTP, node and decoding failures

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;
use uuid::Uuid;

use crate::blockchain::types::{AssetReceipt, AssetRequest, ChainInfo, RpcError, RpcResult};
use crate::config::LedgerConfig;
use crate::connector::types::{ConnectorError, ConnectorResult};

/// Outbound interface to a ledger node.
///
/// The connector owns exactly one implementation for its whole lifetime.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// URL of the endpoint requests are currently sent to.
    fn endpoint(&self) -> String;

    /// Liveness query returning chain metadata.
    async fn chain_info(&self) -> RpcResult<ChainInfo>;

    /// Submit an asset creation carrying a payload.
    async fn create_assets(&self, request: &AssetRequest) -> RpcResult<AssetReceipt>;
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: String,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    message: String,
}

/// JSON-RPC client for a Bifrost node.
pub struct BifrostClient {
    http: reqwest::Client,
    /// Primary endpoint first, then failovers.
    endpoints: Vec<Url>,
    /// Index of the endpoint that last answered the liveness query.
    active: AtomicUsize,
    /// Share of the liveness deadline each endpoint gets before the next is tried.
    endpoint_timeout: Duration,
    api_key: Option<String>,
    chain_route: String,
    asset_route: String,
}

impl BifrostClient {
    /// Create a client for the configured endpoints.
    ///
    /// No request is made here; an unreachable node is only discovered by
    /// the first call.
    pub fn new(config: &LedgerConfig) -> ConnectorResult<Self> {
        let mut endpoints = Vec::new();
        for raw in config.endpoints() {
            endpoints.push(parse_base_url(raw)?);
        }

        let endpoint_timeout = config.liveness_timeout() / endpoints.len().max(1) as u32;

        let mut builder = reqwest::Client::builder().connect_timeout(config.liveness_timeout());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ConnectorError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoints,
            active: AtomicUsize::new(0),
            endpoint_timeout,
            api_key: config.api_key.clone(),
            chain_route: config.chain_route.clone(),
            asset_route: config.asset_route.clone(),
        })
    }

    fn active_endpoint(&self) -> &Url {
        let idx = self.active.load(Ordering::Relaxed);
        &self.endpoints[idx % self.endpoints.len()]
    }

    async fn call<P, T>(&self, base: &Url, route: &str, method: &str, params: P) -> RpcResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let url = base
            .join(route)
            .map_err(|e| RpcError::Transport(format!("invalid route '{}': {}", route, e)))?;

        let request = RpcRequest {
            jsonrpc: "2.0",
            id: Uuid::new_v4().to_string(),
            method,
            params,
        };

        tracing::debug!(url = %url, method, id = %request.id, "Ledger RPC call");

        let mut builder = self.http.post(url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<RpcResponse<T>>(&body);

        if let Ok(RpcResponse { error: Some(err), .. }) = &parsed {
            return Err(RpcError::Remote {
                code: err.code,
                message: err.message.clone(),
            });
        }

        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parsed
            .map_err(|e| RpcError::Decode(e.to_string()))?
            .result
            .ok_or_else(|| RpcError::Decode(format!("{} returned no result", method)))
    }
}

#[async_trait]
impl LedgerClient for BifrostClient {
    fn endpoint(&self) -> String {
        self.active_endpoint().to_string()
    }

    async fn chain_info(&self) -> RpcResult<ChainInfo> {
        let mut last_error = None;

        for (i, base) in self.endpoints.iter().enumerate() {
            let fut = self.call(base, &self.chain_route, "chainInfo", [serde_json::json!({})]);
            match timeout(self.endpoint_timeout, fut).await {
                Ok(Ok(info)) => {
                    self.active.store(i, Ordering::Relaxed);
                    return Ok(info);
                }
                Ok(Err(e)) => {
                    tracing::warn!(endpoint = %base, error = %e, "Chain info failed, trying next endpoint");
                    last_error = Some(e);
                }
                Err(_) => {
                    let after_ms = self.endpoint_timeout.as_millis() as u64;
                    tracing::warn!(endpoint = %base, timeout_ms = after_ms, "Chain info timed out, trying next endpoint");
                    last_error = Some(RpcError::Timeout { after_ms });
                }
            }
        }

        Err(last_error.unwrap_or_else(|| RpcError::Transport("no endpoints configured".to_string())))
    }

    async fn create_assets(&self, request: &AssetRequest) -> RpcResult<AssetReceipt> {
        // Asset creation is not idempotent, so it is never retried elsewhere.
        let base = self.active_endpoint();
        let receipt: AssetReceipt = self
            .call(base, &self.asset_route, "createAssets", [request])
            .await?;

        if receipt.tx_hash.trim().is_empty() {
            return Err(RpcError::Decode("empty txHash".to_string()));
        }
        Ok(receipt)
    }
}

impl std::fmt::Debug for BifrostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BifrostClient")
            .field("endpoint", &self.active_endpoint().as_str())
            .field("endpoints", &self.endpoints.len())
            .field("endpoint_timeout", &self.endpoint_timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Parse an endpoint so that relative routes join beneath its path.
fn parse_base_url(raw: &str) -> ConnectorResult<Url> {
    let mut url: Url = raw
        .parse()
        .map_err(|e| ConnectorError::Config(format!("Invalid endpoint URL '{}': {}", raw, e)))?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("http://node:9085/api").unwrap();
        assert_eq!(url.join("topl/").unwrap().as_str(), "http://node:9085/api/topl/");

        let url = parse_base_url("http://node:9085").unwrap();
        assert_eq!(url.join("asset/").unwrap().as_str(), "http://node:9085/asset/");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config = LedgerConfig::default();
        config.failover_endpoints.push("::not-a-url".to_string());
        let err = BifrostClient::new(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint URL"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = LedgerConfig::default();
        config.api_key = Some("topl_the_world!".to_string());
        let client = BifrostClient::new(&config).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("topl_the_world!"));
    }

    #[test]
    fn test_liveness_budget_is_split_across_endpoints() {
        let mut config = LedgerConfig::default();
        config.liveness_timeout_ms = 9_000;
        config.failover_endpoints = vec![
            "http://backup-a:9085/".to_string(),
            "http://backup-b:9085/".to_string(),
        ];
        let client = BifrostClient::new(&config).unwrap();
        assert_eq!(client.endpoint_timeout, Duration::from_secs(3));

        let single = BifrostClient::new(&LedgerConfig::default()).unwrap();
        assert_eq!(single.endpoint_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_request_envelope() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: "1".to_string(),
            method: "chainInfo",
            params: [serde_json::json!({})],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "chainInfo");
        assert_eq!(json["params"], serde_json::json!([{}]));
    }
}
