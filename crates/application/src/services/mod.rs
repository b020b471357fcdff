pub mod health_checker;
pub mod status_board;

pub use health_checker::{HealthCheckSettings, HealthChecker};
pub use status_board::StatusBoard;
