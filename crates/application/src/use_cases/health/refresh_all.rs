use crate::events::{MonitorEvent, MonitorEventEmitter};
use crate::services::{HealthChecker, StatusBoard};
use futures::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed { probed: usize },
    /// Another refresh was still in flight.
    Skipped,
}

/// Use case: probe every configured source concurrently.
///
/// Resolves once all probes have finished. A failing probe never cancels or
/// delays the others, and at most one refresh cycle runs at a time.
///
/// The cycle runs on its own task: dropping the `execute` future (a client
/// hanging up, for instance) does not abort the probes, which still record
/// their verdicts on the board.
pub struct RefreshAllSourcesUseCase {
    checker: Arc<HealthChecker>,
    board: Arc<StatusBoard>,
    emitter: MonitorEventEmitter,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag when the cycle task finishes.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RefreshAllSourcesUseCase {
    pub fn new(
        checker: Arc<HealthChecker>,
        board: Arc<StatusBoard>,
        emitter: MonitorEventEmitter,
    ) -> Self {
        Self {
            checker,
            board,
            emitter,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn execute(&self, cancel: &CancellationToken) -> RefreshOutcome {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("Refresh already in flight, skipping");
            self.emitter.emit(MonitorEvent::RefreshSkipped);
            return RefreshOutcome::Skipped;
        }
        let guard = InFlightGuard(Arc::clone(&self.in_flight));

        let cycle = tokio::spawn(run_cycle(
            Arc::clone(&self.checker),
            Arc::clone(&self.board),
            self.emitter.clone(),
            cancel.clone(),
            guard,
        ));

        match cycle.await {
            Ok(probed) => RefreshOutcome::Completed { probed },
            Err(e) => {
                error!(error = %e, "Refresh cycle task failed");
                RefreshOutcome::Completed { probed: 0 }
            }
        }
    }
}

async fn run_cycle(
    checker: Arc<HealthChecker>,
    board: Arc<StatusBoard>,
    emitter: MonitorEventEmitter,
    cancel: CancellationToken,
    _guard: InFlightGuard,
) -> usize {
    let started = Instant::now();
    let sources = board.sources();

    for source in sources {
        board.begin_probe(&source.id);
    }

    let probes = sources.iter().map(|source| {
        let checker = &checker;
        let board = &board;
        let cancel = &cancel;
        async move {
            let status = checker.check_health(source, cancel).await;
            board.record(status);
        }
    });
    join_all(probes).await;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let overall = board.overall();

    info!(
        probed = sources.len(),
        elapsed_ms,
        overall = overall.text,
        healthy = overall.counts.healthy,
        degraded = overall.counts.degraded,
        error = overall.counts.error,
        "Refresh cycle completed"
    );

    emitter.emit(MonitorEvent::RefreshCompleted {
        probed: sources.len(),
        elapsed_ms,
    });

    sources.len()
}
