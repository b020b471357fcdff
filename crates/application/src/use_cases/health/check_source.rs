use crate::services::{HealthChecker, StatusBoard};
use sourcewatch_domain::{DataSourceStatus, DomainError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Use case: re-probe a single source on user request.
///
/// Like a full refresh, the probe runs on its own task so that it still
/// records its verdict when the caller goes away mid-flight.
pub struct CheckSourceUseCase {
    checker: Arc<HealthChecker>,
    board: Arc<StatusBoard>,
}

impl CheckSourceUseCase {
    pub fn new(checker: Arc<HealthChecker>, board: Arc<StatusBoard>) -> Self {
        Self { checker, board }
    }

    pub async fn execute(
        &self,
        source_id: &str,
        cancel: &CancellationToken,
    ) -> Result<DataSourceStatus, DomainError> {
        let source = self
            .board
            .source(source_id)
            .cloned()
            .ok_or_else(|| DomainError::SourceNotFound(source_id.to_string()))?;

        debug!(source = %source.id, "Retrying data source");

        let checker = Arc::clone(&self.checker);
        let board = Arc::clone(&self.board);
        let cancel = cancel.clone();

        let probe = tokio::spawn(async move {
            board.begin_probe(&source.id);
            let status = checker.check_health(&source, &cancel).await;
            board.record(status.clone());
            status
        });

        probe
            .await
            .map_err(|e| DomainError::TaskFailed(e.to_string()))
    }
}
