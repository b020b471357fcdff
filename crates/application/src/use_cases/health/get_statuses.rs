use crate::services::StatusBoard;
use sourcewatch_domain::DataSourceStatus;
use std::sync::Arc;

pub struct GetSourceStatusesUseCase {
    board: Arc<StatusBoard>,
}

impl GetSourceStatusesUseCase {
    pub fn new(board: Arc<StatusBoard>) -> Self {
        Self { board }
    }

    pub fn execute(&self) -> Vec<DataSourceStatus> {
        self.board.snapshot()
    }
}
