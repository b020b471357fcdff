//! Configuration module for SourceWatch
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP API binding
//! - `health`: Probe timing and refresh interval
//! - `cache`: Cache store quota
//! - `sources`: Monitored data sources
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod health;
pub mod logging;
pub mod root;
pub mod server;
pub mod sources;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use health::HealthCheckConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use sources::{SourceEndpoint, SourcesConfig};
