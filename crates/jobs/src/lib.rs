pub mod health_refresh;
pub mod runner;

pub use health_refresh::HealthRefreshJob;
pub use runner::JobRunner;
