#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use sourcewatch_api::AppState;
use sourcewatch_application::events::MonitorEventEmitter;
use sourcewatch_application::ports::{ProbeResponse, SourceProber};
use sourcewatch_application::services::{HealthCheckSettings, HealthChecker, StatusBoard};
use sourcewatch_application::use_cases::{
    CheckSourceUseCase, ClearCacheUseCase, GetCacheStatsUseCase, GetOverallStatusUseCase,
    GetSourceStatusesUseCase, ListCacheEntriesUseCase, RefreshAllSourcesUseCase,
};
use sourcewatch_domain::{DataSource, DomainError};
use sourcewatch_infrastructure::{ManualClock, MemoryCacheStore};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// `pygeoapi` answers with JSON, `paavo` with a 503 and `digitransit` with
/// JSON after `slow_delay`.
pub struct FixedProber {
    pub slow_delay: Duration,
}

#[async_trait]
impl SourceProber for FixedProber {
    async fn probe(&self, source: &DataSource) -> Result<ProbeResponse, DomainError> {
        match source.id.as_str() {
            "pygeoapi" => Ok(ProbeResponse::Success {
                body: json!({"type": "FeatureCollection", "numberReturned": 1}),
            }),
            "paavo" => Ok(ProbeResponse::HttpError {
                status: 503,
                reason: "Service Unavailable".to_string(),
            }),
            "digitransit" => {
                tokio::time::sleep(self.slow_delay).await;
                Ok(ProbeResponse::Success {
                    body: json!({"features": []}),
                })
            }
            other => Err(DomainError::Network(format!("unreachable: {other}"))),
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub cache: Arc<MemoryCacheStore>,
    pub clock: Arc<ManualClock>,
}

pub fn source(id: &str, name: &str) -> DataSource {
    DataSource::new(id, name, format!("http://localhost:5173/{id}")).unwrap()
}

pub fn test_app(sources: Vec<DataSource>, slow_delay: Duration) -> TestApp {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let cache = Arc::new(MemoryCacheStore::new(1024 * 1024, clock.clone()));
    let checker = Arc::new(HealthChecker::new(
        cache.clone(),
        Arc::new(FixedProber { slow_delay }),
        clock.clone(),
        HealthCheckSettings::default(),
    ));
    let emitter = MonitorEventEmitter::new_disabled();
    let board = Arc::new(StatusBoard::new(sources, emitter.clone()));

    let state = AppState {
        get_statuses: Arc::new(GetSourceStatusesUseCase::new(board.clone())),
        get_overall: Arc::new(GetOverallStatusUseCase::new(board.clone())),
        refresh_all: Arc::new(RefreshAllSourcesUseCase::new(
            checker.clone(),
            board.clone(),
            emitter.clone(),
        )),
        check_source: Arc::new(CheckSourceUseCase::new(checker, board.clone())),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
        list_cache_entries: Arc::new(ListCacheEntriesUseCase::new(cache.clone(), clock.clone())),
        clear_cache: Arc::new(ClearCacheUseCase::new(cache.clone(), board, emitter)),
        shutdown: CancellationToken::new(),
    };

    TestApp {
        state,
        cache,
        clock,
    }
}

pub fn default_app() -> TestApp {
    test_app(
        vec![
            source("pygeoapi", "Heat Exposure (pygeoapi)"),
            source("paavo", "Paavo Statistics"),
        ],
        Duration::from_millis(10),
    )
}

pub fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}
