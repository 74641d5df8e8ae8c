//! Running-timer operations.

use std::sync::Arc;

use chrono::Utc;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::TimeEntry;
use crate::toggl::requests::NewTimeEntry;
use crate::toggl::resolver::WorkspaceResolver;

/// What to start tracking.
#[derive(Debug, Clone, Default)]
pub struct StartTimer {
    pub description: String,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub tags: Vec<String>,
}

pub struct TimerService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> TimerService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    pub async fn current(&self) -> ServiceResult<Option<TimeEntry>> {
        Ok(self.api.get_current_time_entry().await?)
    }

    /// Start a timer now. A timer that is already running is left to the vendor.
    pub async fn start(&self, timer: StartTimer) -> ServiceResult<TimeEntry> {
        let workspace_id = self.workspace.resolve(self.api.as_ref()).await?;
        let entry = NewTimeEntry {
            description: timer.description,
            start: Utc::now(),
            duration: -1,
            project_id: timer.project_id,
            task_id: timer.task_id,
            tags: timer.tags,
            billable: false,
        };
        Ok(self.api.create_time_entry(workspace_id, &entry).await?)
    }

    /// Stop whatever is running. `Ok(None)` when nothing is.
    pub async fn stop(&self) -> ServiceResult<Option<TimeEntry>> {
        let Some(current) = self.api.get_current_time_entry().await? else {
            return Ok(None);
        };
        let stopped = self
            .api
            .stop_time_entry(current.workspace_id, current.id)
            .await?;
        Ok(Some(stopped))
    }
}
