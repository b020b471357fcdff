use crate::services::StatusBoard;
use sourcewatch_domain::OverallStatus;
use std::sync::Arc;

pub struct GetOverallStatusUseCase {
    board: Arc<StatusBoard>,
}

impl GetOverallStatusUseCase {
    pub fn new(board: Arc<StatusBoard>) -> Self {
        Self { board }
    }

    pub fn execute(&self) -> OverallStatus {
        self.board.overall()
    }
}
