use super::{CacheConfig, ConfigError, HealthCheckConfig, LoggingConfig, ServerConfig, SourcesConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Config file looked up in the working directory when no path is given.
const DEFAULT_CONFIG_FILE: &str = "sourcewatch.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub health: HealthCheckConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub interval_secs: Option<u64>,
}

impl Config {
    /// Load configuration from `config_path`, falling back to
    /// `sourcewatch.toml` in the working directory, then to defaults.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(interval) = overrides.interval_secs {
            self.health.interval_secs = interval;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.health.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "health.interval_secs must be greater than 0".into(),
            ));
        }

        if self.health.timeout_ms <= self.health.slow_threshold_ms {
            return Err(ConfigError::Validation(format!(
                "health.timeout_ms ({}) must be greater than health.slow_threshold_ms ({})",
                self.health.timeout_ms, self.health.slow_threshold_ms
            )));
        }

        if self.cache.max_size_bytes == 0 {
            return Err(ConfigError::Validation(
                "cache.max_size_bytes must be greater than 0".into(),
            ));
        }

        if self.sources.endpoints.is_empty() {
            return Err(ConfigError::Validation(
                "at least one data source must be configured".into(),
            ));
        }

        let mut seen = HashSet::new();
        for endpoint in &self.sources.endpoints {
            if !seen.insert(endpoint.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate data source id '{}'",
                    endpoint.id
                )));
            }
        }

        self.sources
            .resolve()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }
}
