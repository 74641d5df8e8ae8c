//! Recent-entry reporting.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::error::{ServiceError, ServiceResult};
use crate::toggl::client::TogglApi;
use crate::toggl::models::TimeEntry;

pub const DEFAULT_DAYS_BACK: u32 = 7;
pub const NO_PROJECT: &str = "No Project";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSummary {
    pub total_hours: f64,
    pub total_entries: usize,
    /// Hours per project id (or `"No Project"`), ordered by key.
    pub project_breakdown: BTreeMap<String, f64>,
    pub period_days: u32,
}

pub struct AnalyticsService<A> {
    api: Arc<A>,
}

impl<A: TogglApi> AnalyticsService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Entries started within the last `days_back` days.
    pub async fn entries(&self, days_back: u32) -> ServiceResult<Vec<TimeEntry>> {
        let end = Utc::now();
        let start = Duration::try_days(i64::from(days_back))
            .and_then(|window| end.checked_sub_signed(window))
            .ok_or_else(|| ServiceError::InvalidArgument("days_back is too large".to_string()))?;
        Ok(self.api.get_time_entries(start, end).await?)
    }

    pub async fn summary(&self, days_back: u32) -> ServiceResult<TimeSummary> {
        let entries = self.entries(days_back).await?;
        Ok(summarize(&entries, days_back))
    }
}

/// Aggregate entries into hours. Running entries count toward
/// `total_entries` but contribute no time.
pub fn summarize(entries: &[TimeEntry], period_days: u32) -> TimeSummary {
    let mut total_seconds: i64 = 0;
    let mut per_project: BTreeMap<String, i64> = BTreeMap::new();

    for entry in entries.iter().filter(|e| e.duration > 0) {
        total_seconds += entry.duration;
        let key = entry
            .project_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| NO_PROJECT.to_string());
        *per_project.entry(key).or_default() += entry.duration;
    }

    TimeSummary {
        total_hours: round2(total_seconds as f64 / 3600.0),
        total_entries: entries.len(),
        project_breakdown: per_project
            .into_iter()
            .map(|(k, secs)| (k, round2(secs as f64 / 3600.0)))
            .collect(),
        period_days,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
