use crate::HealthRefreshJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_health_refresh(HealthRefreshJob::new(refresh).with_cancellation(token))
///     .start();
/// ```
pub struct JobRunner {
    health_refresh: Option<HealthRefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            health_refresh: None,
        }
    }

    pub fn with_health_refresh(mut self, job: HealthRefreshJob) -> Self {
        self.health_refresh = Some(job);
        self
    }

    /// Start all registered jobs and hand back their task handles.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        if let Some(job) = self.health_refresh {
            handles.push(Arc::new(job).start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
