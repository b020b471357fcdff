use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the cache key under which a source's last probe body is stored.
const HEALTH_CACHE_PREFIX: &str = "health-";

/// Tag attached to health probe cache entries for statistics grouping.
pub const HEALTH_ENTRY_TYPE: &str = "health-check";

/// Message used when a failure carries no text of its own.
const CONNECTION_FAILED: &str = "Connection failed";

/// A remote endpoint whose availability is monitored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl DataSource {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let source = Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        };
        source.validate()?;
        Ok(source)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidSource("id cannot be empty".into()));
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidSource(format!(
                "id '{}' cannot contain whitespace",
                self.id
            )));
        }
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidSource(format!(
                "source '{}' has an empty url",
                self.id
            )));
        }
        Ok(())
    }

    /// Key of the cache entry holding this source's most recent probe body.
    pub fn cache_key(&self) -> String {
        health_cache_key(&self.id)
    }
}

pub fn health_cache_key(source_id: &str) -> String {
    format!("{}{}", HEALTH_CACHE_PREFIX, source_id)
}

/// Inverse of `health_cache_key`; `None` for keys outside the health namespace.
pub fn source_id_from_cache_key(key: &str) -> Option<&str> {
    key.strip_prefix(HEALTH_CACHE_PREFIX)
        .filter(|id| !id.is_empty())
}

/// Health state of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    #[default]
    Unknown,
    Loading,
    Healthy,
    Degraded,
    Error,
}

impl SourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Loading => "loading",
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single completed probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeVerdict {
    pub status: SourceStatus,
    pub message: String,
}

impl ProbeVerdict {
    /// Classifies a successful (2xx) response by its latency.
    ///
    /// The threshold is exclusive: a response taking exactly
    /// `slow_threshold_ms` is still healthy.
    pub fn from_latency(elapsed_ms: u64, slow_threshold_ms: u64) -> Self {
        if elapsed_ms > slow_threshold_ms {
            Self {
                status: SourceStatus::Degraded,
                message: format!("Slow response ({}ms)", elapsed_ms),
            }
        } else {
            Self {
                status: SourceStatus::Healthy,
                message: format!("Responsive ({}ms)", elapsed_ms),
            }
        }
    }

    pub fn http_error(status_code: u16, reason: &str) -> Self {
        Self {
            status: SourceStatus::Error,
            message: format!("HTTP {}: {}", status_code, reason),
        }
    }

    pub fn failure(error: &DomainError) -> Self {
        let text = error.to_string();
        Self {
            status: SourceStatus::Error,
            message: if text.trim().is_empty() {
                CONNECTION_FAILED.to_string()
            } else {
                text
            },
        }
    }
}

/// Live health record of one data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceStatus {
    pub id: String,
    pub name: String,
    pub status: SourceStatus,
    pub message: String,
    pub response_time_ms: Option<u64>,
    pub last_updated_ms: Option<u64>,
    pub cached: bool,
}

impl DataSourceStatus {
    /// Initial record for a source that has never been probed.
    pub fn unknown(source: &DataSource) -> Self {
        Self {
            id: source.id.clone(),
            name: source.name.clone(),
            status: SourceStatus::Unknown,
            message: "Not checked yet".to_string(),
            response_time_ms: None,
            last_updated_ms: None,
            cached: false,
        }
    }

    /// Record produced by a finished probe.
    pub fn completed(
        source: &DataSource,
        verdict: ProbeVerdict,
        response_time_ms: u64,
        checked_at_ms: u64,
        cached: bool,
    ) -> Self {
        Self {
            id: source.id.clone(),
            name: source.name.clone(),
            status: verdict.status,
            message: verdict.message,
            response_time_ms: Some(response_time_ms),
            last_updated_ms: Some(checked_at_ms),
            cached,
        }
    }

    /// Moves the record into `loading`, keeping the timing of the last probe.
    pub fn begin_probe(&mut self) {
        self.status = SourceStatus::Loading;
        self.message = "Checking...".to_string();
    }

    /// Forgets that the last probe was backed by a cache entry.
    pub fn clear_cached(&mut self) {
        self.cached = false;
    }
}
