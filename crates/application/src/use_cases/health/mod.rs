pub mod check_source;
pub mod get_overall;
pub mod get_statuses;
pub mod refresh_all;

pub use check_source::CheckSourceUseCase;
pub use get_overall::GetOverallStatusUseCase;
pub use get_statuses::GetSourceStatusesUseCase;
pub use refresh_all::{RefreshAllSourcesUseCase, RefreshOutcome};
