use crate::data_source::{DataSourceStatus, SourceStatus};
use serde::Serialize;

/// Severity of the combined health picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallLevel {
    Error,
    Warning,
    Success,
    Unknown,
}

/// Number of sources per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub healthy: usize,
    pub degraded: usize,
    pub error: usize,
    pub loading: usize,
    pub unknown: usize,
}

impl StatusCounts {
    pub fn tally<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a DataSourceStatus>,
    {
        let mut counts = Self::default();
        for status in statuses {
            match status.status {
                SourceStatus::Healthy => counts.healthy += 1,
                SourceStatus::Degraded => counts.degraded += 1,
                SourceStatus::Error => counts.error += 1,
                SourceStatus::Loading => counts.loading += 1,
                SourceStatus::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.healthy + self.degraded + self.error + self.loading + self.unknown
    }
}

/// Combined health summary rendered by the status panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallStatus {
    pub level: OverallLevel,
    pub color: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub counts: StatusCounts,
}

impl OverallStatus {
    /// Precedence is fixed: error > degraded > healthy > unknown.
    /// Sources still loading do not contribute a verdict.
    pub fn from_counts(counts: StatusCounts) -> Self {
        let level = if counts.error > 0 {
            OverallLevel::Error
        } else if counts.degraded > 0 {
            OverallLevel::Warning
        } else if counts.healthy > 0 {
            OverallLevel::Success
        } else {
            OverallLevel::Unknown
        };

        let (color, icon, text) = match level {
            OverallLevel::Error => ("error", "mdi-alert-circle", "Issues detected"),
            OverallLevel::Warning => ("warning", "mdi-alert", "Performance issues"),
            OverallLevel::Success => ("success", "mdi-check-circle", "All systems operational"),
            OverallLevel::Unknown => ("grey", "mdi-help-circle", "Status unknown"),
        };

        Self {
            level,
            color,
            icon,
            text,
            counts,
        }
    }
}

pub fn overall_status<'a, I>(statuses: I) -> OverallStatus
where
    I: IntoIterator<Item = &'a DataSourceStatus>,
{
    OverallStatus::from_counts(StatusCounts::tally(statuses))
}
