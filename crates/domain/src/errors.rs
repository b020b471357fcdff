use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Data source not found: {0}")]
    SourceNotFound(String),

    #[error("Invalid data source: {0}")]
    InvalidSource(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timed out after {0}ms")]
    ProbeTimeout(u64),

    #[error("Probe cancelled")]
    ProbeCancelled,

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}
