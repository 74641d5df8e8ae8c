//! Time entry CRUD.

use std::sync::Arc;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::TimeEntry;
use crate::toggl::requests::{NewTimeEntry, TimeEntryUpdate};
use crate::toggl::resolver::WorkspaceResolver;

use super::units::{minutes_to_seconds, parse_timestamp};

/// A completed entry as the caller describes it.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub description: String,
    pub start_time: String,
    pub duration_minutes: i64,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub tags: Vec<String>,
    pub billable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub duration_minutes: Option<i64>,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub billable: Option<bool>,
}

pub struct EntryService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> EntryService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    pub async fn create(&self, draft: EntryDraft) -> ServiceResult<TimeEntry> {
        // validate before any network call
        let start = parse_timestamp("start_time", &draft.start_time)?;
        let duration = minutes_to_seconds(draft.duration_minutes)?;
        let workspace_id = self.workspace.resolve(self.api.as_ref()).await?;

        let entry = NewTimeEntry {
            description: draft.description,
            start,
            duration,
            project_id: draft.project_id,
            task_id: draft.task_id,
            tags: draft.tags,
            billable: draft.billable,
        };
        Ok(self.api.create_time_entry(workspace_id, &entry).await?)
    }

    pub async fn get(&self, time_entry_id: i64) -> ServiceResult<Option<TimeEntry>> {
        Ok(self.api.get_time_entry(time_entry_id).await?)
    }

    pub async fn update(
        &self,
        time_entry_id: i64,
        changes: EntryChanges,
    ) -> ServiceResult<TimeEntry> {
        let start = changes
            .start_time
            .as_deref()
            .map(|s| parse_timestamp("start_time", s))
            .transpose()?;
        let duration = changes
            .duration_minutes
            .map(minutes_to_seconds)
            .transpose()?;
        let workspace_id = self.workspace.resolve(self.api.as_ref()).await?;

        let update = TimeEntryUpdate {
            description: changes.description,
            start,
            duration,
            project_id: changes.project_id,
            task_id: changes.task_id,
            tags: changes.tags,
            billable: changes.billable,
        };
        Ok(self
            .api
            .update_time_entry(workspace_id, time_entry_id, &update)
            .await?)
    }

    pub async fn delete(&self, time_entry_id: i64) -> ServiceResult<bool> {
        let workspace_id = self.workspace.resolve(self.api.as_ref()).await?;
        Ok(self
            .api
            .delete_time_entry(workspace_id, time_entry_id)
            .await?)
    }
}
