use crate::ports::{CacheStore, Clock, ProbeResponse, SourceProber};
use sourcewatch_domain::config::HealthCheckConfig;
use sourcewatch_domain::{
    CacheWriteOptions, DataSource, DataSourceStatus, DomainError, ProbeVerdict,
    HEALTH_ENTRY_TYPE,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Timing parameters for a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCheckSettings {
    pub timeout: Duration,
    pub slow_threshold_ms: u64,
    pub cache_ttl: Duration,
}

impl Default for HealthCheckSettings {
    fn default() -> Self {
        Self::from(&HealthCheckConfig::default())
    }
}

impl From<&HealthCheckConfig> for HealthCheckSettings {
    fn from(config: &HealthCheckConfig) -> Self {
        Self {
            timeout: config.timeout(),
            slow_threshold_ms: config.slow_threshold_ms,
            cache_ttl: config.cache_ttl(),
        }
    }
}

/// Probes one data source and classifies its health.
///
/// Each call only touches the source's own cache key, so checks for different
/// sources can run concurrently.
pub struct HealthChecker {
    cache: Arc<dyn CacheStore>,
    prober: Arc<dyn SourceProber>,
    clock: Arc<dyn Clock>,
    settings: HealthCheckSettings,
}

impl HealthChecker {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        prober: Arc<dyn SourceProber>,
        clock: Arc<dyn Clock>,
        settings: HealthCheckSettings,
    ) -> Self {
        Self {
            cache,
            prober,
            clock,
            settings,
        }
    }

    /// Runs one probe against `source`.
    ///
    /// Never fails: transport errors, non-2xx answers, timeouts and
    /// cancellation all become an `error` verdict. A cache hit only marks the
    /// result as `cached`; the live probe is always issued.
    pub async fn check_health(
        &self,
        source: &DataSource,
        cancel: &CancellationToken,
    ) -> DataSourceStatus {
        let key = source.cache_key();
        let cached = self
            .cache
            .get_data(&key, self.settings.cache_ttl)
            .await
            .is_some();

        debug!(source = %source.id, url = %source.url, cached, "Probing data source");

        let started = Instant::now();
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::ProbeCancelled),
            result = tokio::time::timeout(self.settings.timeout, self.prober.probe(source)) => {
                match result {
                    Ok(response) => response,
                    Err(_) => Err(DomainError::ProbeTimeout(self.settings.timeout.as_millis() as u64)),
                }
            }
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let verdict = match outcome {
            Ok(ProbeResponse::Success { body }) => {
                let verdict = ProbeVerdict::from_latency(elapsed_ms, self.settings.slow_threshold_ms);
                self.cache
                    .set_data(
                        &key,
                        body,
                        CacheWriteOptions::new(HEALTH_ENTRY_TYPE, self.settings.cache_ttl),
                    )
                    .await;
                verdict
            }
            Ok(ProbeResponse::HttpError { status, reason }) => {
                ProbeVerdict::http_error(status, &reason)
            }
            Err(e) => {
                warn!(source = %source.id, error = %e, "Probe failed");
                ProbeVerdict::failure(&e)
            }
        };

        info!(
            source = %source.id,
            status = %verdict.status,
            response_time_ms = elapsed_ms,
            cached,
            "Probe completed"
        );

        DataSourceStatus::completed(source, verdict, elapsed_ms, self.clock.now_ms(), cached)
    }
}
