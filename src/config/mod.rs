//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ConnectorConfig (validated, immutable)
//!     → LedgerConfig handed to Connector::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a connector never re-reads it
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, parse_config, ConfigError};
pub use schema::ConnectorConfig;
pub use schema::LedgerConfig;
pub use schema::ObservabilityConfig;
