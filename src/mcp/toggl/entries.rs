//! Time entry CRUD tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::envelope::{ToolError, deleted, found, render};
use crate::toggl::TogglApi;
use crate::toggl::services::{EntryChanges, EntryDraft};

use super::TogglMcpServer;

fn default_billable() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTimeEntryParams {
    #[schemars(description = "Description of what was worked on")]
    pub description: String,
    #[schemars(description = "Start time in ISO 8601 format (e.g. \"2024-01-01T10:00:00Z\")")]
    pub start_time: String,
    #[schemars(description = "Duration in minutes")]
    pub duration_minutes: i64,
    #[schemars(description = "Project ID to associate with the time entry")]
    pub project_id: Option<i64>,
    #[schemars(description = "Task ID to associate with the time entry")]
    pub task_id: Option<i64>,
    #[schemars(description = "Tags for the time entry")]
    pub tags: Option<Vec<String>>,
    #[serde(default = "default_billable")]
    #[schemars(description = "Whether the time entry is billable (default: true)")]
    pub billable: bool,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TimeEntryIdParams {
    #[schemars(description = "Time entry ID")]
    pub time_entry_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTimeEntryParams {
    #[schemars(description = "ID of the time entry to update")]
    pub time_entry_id: i64,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[schemars(description = "New start time in ISO 8601 format")]
    pub start_time: Option<String>,
    #[schemars(description = "New duration in minutes")]
    pub duration_minutes: Option<i64>,
    #[schemars(description = "New project ID")]
    pub project_id: Option<i64>,
    #[schemars(description = "New task ID")]
    pub task_id: Option<i64>,
    #[schemars(description = "New list of tags (replaces existing tags)")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Whether the time entry is billable")]
    pub billable: Option<bool>,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn entry_tools() -> ToolRouter<Self> {
        Self::entry_router()
    }
}

#[tool_router(router = entry_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_create_time_entry",
        description = "Create a completed time entry (not a running timer). Duration is given in minutes."
    )]
    pub async fn create_time_entry(
        &self,
        Parameters(params): Parameters<CreateTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let draft = EntryDraft {
            description: params.description,
            start_time: params.start_time,
            duration_minutes: params.duration_minutes,
            project_id: params.project_id,
            task_id: params.task_id,
            tags: params.tags.unwrap_or_default(),
            billable: params.billable,
        };
        let outcome = self
            .services
            .entries
            .create(draft)
            .await
            .map_err(ToolError::from);
        render("toggl_create_time_entry", outcome)
    }

    #[tool(
        name = "toggl_get_time_entry",
        description = "Get details of a specific time entry"
    )]
    pub async fn get_time_entry(
        &self,
        Parameters(params): Parameters<TimeEntryIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .entries
            .get(params.time_entry_id)
            .await
            .map_err(ToolError::from)
            .and_then(|entry| found(entry, "Time entry not found"));
        render("toggl_get_time_entry", outcome)
    }

    #[tool(
        name = "toggl_update_time_entry",
        description = "Update an existing time entry. Only the supplied fields change."
    )]
    pub async fn update_time_entry(
        &self,
        Parameters(params): Parameters<UpdateTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let changes = EntryChanges {
            description: params.description,
            start_time: params.start_time,
            duration_minutes: params.duration_minutes,
            project_id: params.project_id,
            task_id: params.task_id,
            tags: params.tags,
            billable: params.billable,
        };
        let outcome = self
            .services
            .entries
            .update(params.time_entry_id, changes)
            .await
            .map_err(ToolError::from);
        render("toggl_update_time_entry", outcome)
    }

    #[tool(name = "toggl_delete_time_entry", description = "Delete a time entry")]
    pub async fn delete_time_entry(
        &self,
        Parameters(params): Parameters<TimeEntryIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.time_entry_id;
        let outcome = self
            .services
            .entries
            .delete(id)
            .await
            .map(|ok| deleted(ok, "Time entry", id))
            .map_err(ToolError::from);
        render("toggl_delete_time_entry", outcome)
    }
}
