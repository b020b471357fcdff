mod events;

pub use events::spawn_event_logger;

use sourcewatch_api::AppState;
use sourcewatch_application::events::{MonitorEvent, MonitorEventEmitter};
use sourcewatch_application::services::{HealthCheckSettings, HealthChecker, StatusBoard};
use sourcewatch_application::use_cases::{
    CheckSourceUseCase, ClearCacheUseCase, GetCacheStatsUseCase, GetOverallStatusUseCase,
    GetSourceStatusesUseCase, ListCacheEntriesUseCase, RefreshAllSourcesUseCase,
};
use sourcewatch_domain::Config;
use sourcewatch_infrastructure::{HttpSourceProber, MemoryCacheStore, SystemClock};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Everything the binary needs after wiring adapters into use cases.
pub struct Services {
    pub state: AppState,
    pub refresh: Arc<RefreshAllSourcesUseCase>,
    pub events: mpsc::UnboundedReceiver<MonitorEvent>,
}

impl Services {
    pub fn build(config: &Config, shutdown: CancellationToken) -> anyhow::Result<Self> {
        let sources = config.sources.resolve()?;
        let (emitter, events) = MonitorEventEmitter::new_enabled();

        let clock = Arc::new(SystemClock);
        let cache = Arc::new(MemoryCacheStore::new(
            config.cache.max_size_bytes,
            clock.clone(),
        ));
        let prober = Arc::new(HttpSourceProber::new());

        let checker = Arc::new(HealthChecker::new(
            cache.clone(),
            prober,
            clock.clone(),
            HealthCheckSettings::from(&config.health),
        ));
        let board = Arc::new(StatusBoard::new(sources, emitter.clone()));

        let refresh = Arc::new(RefreshAllSourcesUseCase::new(
            checker.clone(),
            board.clone(),
            emitter.clone(),
        ));

        let state = AppState {
            get_statuses: Arc::new(GetSourceStatusesUseCase::new(board.clone())),
            get_overall: Arc::new(GetOverallStatusUseCase::new(board.clone())),
            refresh_all: refresh.clone(),
            check_source: Arc::new(CheckSourceUseCase::new(checker, board.clone())),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
            list_cache_entries: Arc::new(ListCacheEntriesUseCase::new(cache.clone(), clock)),
            clear_cache: Arc::new(ClearCacheUseCase::new(cache, board.clone(), emitter)),
            shutdown,
        };

        info!(sources = board.sources().len(), "Services initialized");

        Ok(Self {
            state,
            refresh,
            events,
        })
    }
}
