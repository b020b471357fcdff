use sourcewatch_application::use_cases::{RefreshAllSourcesUseCase, RefreshOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Re-probes every source on a fixed interval.
///
/// The first cycle runs immediately. A tick that lands while a cycle is still
/// running is skipped rather than queued.
pub struct HealthRefreshJob {
    refresh: Arc<RefreshAllSourcesUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl HealthRefreshJob {
    pub fn new(refresh: Arc<RefreshAllSourcesUseCase>) -> Self {
        Self {
            refresh,
            interval: Duration::from_secs(30),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting health refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("HealthRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.refresh.execute(&self.shutdown).await {
                            RefreshOutcome::Completed { probed } => {
                                debug!(probed, "Scheduled refresh finished");
                            }
                            RefreshOutcome::Skipped => {
                                debug!("Scheduled refresh skipped, previous cycle still running");
                            }
                        }
                    }
                }
            }
        })
    }
}
