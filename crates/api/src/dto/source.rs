use serde::Serialize;
use sourcewatch_domain::{DataSourceStatus, OverallLevel, OverallStatus, StatusCounts};

#[derive(Serialize, Debug, Clone)]
pub struct SourceStatusResponse {
    pub id: String,
    pub name: String,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_ms: Option<u64>,
    pub cached: bool,
}

impl From<DataSourceStatus> for SourceStatusResponse {
    fn from(status: DataSourceStatus) -> Self {
        Self {
            id: status.id,
            name: status.name,
            status: status.status.as_str().to_string(),
            message: status.message,
            response_time_ms: status.response_time_ms,
            last_updated_ms: status.last_updated_ms,
            cached: status.cached,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct OverallStatusResponse {
    pub level: OverallLevel,
    pub color: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub counts: StatusCounts,
}

impl From<OverallStatus> for OverallStatusResponse {
    fn from(overall: OverallStatus) -> Self {
        Self {
            level: overall.level,
            color: overall.color,
            icon: overall.icon,
            text: overall.text,
            counts: overall.counts,
        }
    }
}

/// Body returned after a completed refresh cycle.
#[derive(Serialize, Debug, Clone)]
pub struct RefreshResponse {
    pub probed: usize,
    pub overall: OverallStatusResponse,
    pub sources: Vec<SourceStatusResponse>,
}
