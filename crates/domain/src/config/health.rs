use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health check configuration for monitored data sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthCheckConfig {
    /// Interval between refresh cycles in seconds (default: 30)
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Probe timeout in milliseconds (default: 15000)
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Responses slower than this are reported as degraded (default: 5000)
    #[serde(default = "default_slow_threshold")]
    pub slow_threshold_ms: u64,

    /// TTL of cached probe bodies in seconds (default: 300)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl HealthCheckConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            timeout_ms: default_timeout(),
            slow_threshold_ms: default_slow_threshold(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_interval() -> u64 {
    30
}

fn default_timeout() -> u64 {
    15000
}

fn default_slow_threshold() -> u64 {
    5000
}

fn default_cache_ttl() -> u64 {
    300
}
