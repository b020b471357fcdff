//! SourceWatch Domain Layer
pub mod cache_entry;
pub mod config;
pub mod data_source;
pub mod errors;
pub mod overall_status;

pub use cache_entry::{CacheEntry, CacheEntryInfo, CacheStats, CacheWriteOptions};
pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use data_source::{
    health_cache_key, source_id_from_cache_key, DataSource, DataSourceStatus, ProbeVerdict,
    SourceStatus, HEALTH_ENTRY_TYPE,
};
pub use errors::DomainError;
pub use overall_status::{overall_status, OverallLevel, OverallStatus, StatusCounts};
