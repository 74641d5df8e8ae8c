//! Task tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::envelope::{ToolError, deleted, found, render};
use crate::toggl::TogglApi;

use super::TogglMcpServer;

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "Project ID to list tasks for; omit to list tasks of every project")]
    pub project_id: Option<i64>,
    #[schemars(description = "Only active (true) or inactive (false) tasks")]
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskRefParams {
    #[schemars(description = "Project ID the task belongs to")]
    pub project_id: i64,
    #[schemars(description = "Task ID")]
    pub task_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Project ID to create the task in")]
    pub project_id: i64,
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Estimated time in hours")]
    pub estimated_hours: Option<f64>,
    #[serde(default = "default_true")]
    #[schemars(description = "Whether the task is active (default: true)")]
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Project ID the task belongs to")]
    pub project_id: i64,
    #[schemars(description = "ID of the task to update")]
    pub task_id: i64,
    #[schemars(description = "New task name")]
    pub name: Option<String>,
    #[schemars(description = "New estimated time in hours")]
    pub estimated_hours: Option<f64>,
    #[schemars(description = "Whether the task is active")]
    pub active: Option<bool>,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn task_tools() -> ToolRouter<Self> {
        Self::task_router()
    }
}

#[tool_router(router = task_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_tasks",
        description = "Get tasks of a project, or of every project in the workspace when no project is given. Projects whose tasks could not be fetched are listed under \"skipped\"."
    )]
    pub async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .tasks
            .list(params.project_id, params.active)
            .await
            .map(|listing| {
                json!({
                    "items": listing.tasks,
                    "total": listing.tasks.len(),
                    "skipped": listing.skipped,
                })
            })
            .map_err(ToolError::from);
        render("toggl_get_tasks", outcome)
    }

    #[tool(
        name = "toggl_get_task",
        description = "Get details of a specific task"
    )]
    pub async fn get_task(
        &self,
        Parameters(params): Parameters<TaskRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .tasks
            .get(params.project_id, params.task_id)
            .await
            .map_err(ToolError::from)
            .and_then(|task| found(task, "Task not found"));
        render("toggl_get_task", outcome)
    }

    #[tool(
        name = "toggl_create_task",
        description = "Create a new task in a project. Estimates are given in hours."
    )]
    pub async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .tasks
            .create(
                params.project_id,
                params.name,
                params.estimated_hours,
                params.active,
            )
            .await
            .map_err(ToolError::from);
        render("toggl_create_task", outcome)
    }

    #[tool(name = "toggl_update_task", description = "Update an existing task")]
    pub async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .tasks
            .update(
                params.project_id,
                params.task_id,
                params.name,
                params.estimated_hours,
                params.active,
            )
            .await
            .map_err(ToolError::from);
        render("toggl_update_task", outcome)
    }

    #[tool(name = "toggl_delete_task", description = "Delete a task")]
    pub async fn delete_task(
        &self,
        Parameters(params): Parameters<TaskRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.task_id;
        let outcome = self
            .services
            .tasks
            .delete(params.project_id, id)
            .await
            .map(|ok| deleted(ok, "Task", id))
            .map_err(ToolError::from);
        render("toggl_delete_task", outcome)
    }
}
