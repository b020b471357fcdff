#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use sourcewatch_application::events::MonitorEventEmitter;
use sourcewatch_application::ports::{ProbeResponse, SourceProber};
use sourcewatch_application::services::{HealthCheckSettings, HealthChecker, StatusBoard};
use sourcewatch_application::use_cases::RefreshAllSourcesUseCase;
use sourcewatch_domain::{DataSource, DomainError};
use sourcewatch_infrastructure::{ManualClock, MemoryCacheStore};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Answers every probe with the same JSON body after a fixed delay.
pub struct DelayedProber {
    delay: Duration,
    calls: AtomicU64,
}

impl DelayedProber {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceProber for DelayedProber {
    async fn probe(&self, _source: &DataSource) -> Result<ProbeResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(ProbeResponse::Success {
            body: json!({"type": "FeatureCollection"}),
        })
    }
}

pub struct Fixture {
    pub prober: Arc<DelayedProber>,
    pub board: Arc<StatusBoard>,
    pub refresh: Arc<RefreshAllSourcesUseCase>,
}

/// One source, a real in-memory cache and a prober that takes `delay`.
pub fn fixture(delay: Duration) -> Fixture {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let cache = Arc::new(MemoryCacheStore::new(1024 * 1024, clock.clone()));
    let prober = Arc::new(DelayedProber::new(delay));
    let settings = HealthCheckSettings {
        timeout: Duration::from_secs(120),
        ..HealthCheckSettings::default()
    };
    let checker = Arc::new(HealthChecker::new(cache, prober.clone(), clock, settings));

    let source =
        DataSource::new("paavo", "Paavo Statistics", "http://localhost:5173/paavo").unwrap();
    let board = Arc::new(StatusBoard::new(
        vec![source],
        MonitorEventEmitter::new_disabled(),
    ));
    let refresh = Arc::new(RefreshAllSourcesUseCase::new(
        checker,
        board.clone(),
        MonitorEventEmitter::new_disabled(),
    ));

    Fixture {
        prober,
        board,
        refresh,
    }
}
