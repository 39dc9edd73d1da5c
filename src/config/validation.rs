//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate endpoint URLs and the ledger account
//! - Validate value ranges (timeouts > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConnectorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ConnectorConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "ledger.endpoint").
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &ConnectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let ledger = &config.ledger;

    if ledger.name.trim().is_empty() {
        errors.push(ValidationError::new("ledger.name", "must not be empty"));
    }

    if let Err(message) = check_endpoint(&ledger.endpoint) {
        errors.push(ValidationError::new("ledger.endpoint", message));
    }
    for (i, endpoint) in ledger.failover_endpoints.iter().enumerate() {
        if let Err(message) = check_endpoint(endpoint) {
            errors.push(ValidationError::new(
                format!("ledger.failover_endpoints[{}]", i),
                message,
            ));
        }
    }

    if ledger.account.is_empty() {
        errors.push(ValidationError::new("ledger.account", "must not be empty"));
    } else if let Err(e) = bs58::decode(&ledger.account).into_vec() {
        errors.push(ValidationError::new(
            "ledger.account",
            format!("not a base58 address: {}", e),
        ));
    }

    if ledger.asset_code.trim().is_empty() {
        errors.push(ValidationError::new("ledger.asset_code", "must not be empty"));
    }

    if ledger.liveness_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "ledger.liveness_timeout_ms",
            "must be greater than zero",
        ));
    }
    if ledger.submit_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "ledger.submit_timeout_ms",
            "must be greater than zero",
        ));
    }

    let observability = &config.observability;
    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", observability.log_level),
        ));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("invalid socket address '{}'", observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_endpoint(raw: &str) -> Result<(), String> {
    let url = url::Url::parse(raw).map_err(|e| format!("invalid URL '{}': {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}
