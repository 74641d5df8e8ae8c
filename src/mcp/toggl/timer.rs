//! Running-timer tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::envelope::{NOTHING_RUNNING, ToolError, render};
use crate::toggl::TogglApi;
use crate::toggl::models::TimeEntry;
use crate::toggl::services::StartTimer;

use super::TogglMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StartTimerParams {
    #[schemars(description = "Description of what you're working on")]
    pub description: String,
    #[schemars(description = "Project ID to associate with the time entry")]
    pub project_id: Option<i64>,
    #[schemars(description = "Task ID to associate with the time entry")]
    pub task_id: Option<i64>,
    #[schemars(description = "Tags for the time entry")]
    pub tags: Option<Vec<String>>,
}

/// A running entry, or the neutral idle status.
#[derive(Serialize)]
#[serde(untagged)]
enum TimerState {
    Entry(TimeEntry),
    Idle { status: &'static str },
}

impl From<Option<TimeEntry>> for TimerState {
    fn from(entry: Option<TimeEntry>) -> Self {
        match entry {
            Some(entry) => TimerState::Entry(entry),
            None => TimerState::Idle {
                status: NOTHING_RUNNING,
            },
        }
    }
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn timer_tools() -> ToolRouter<Self> {
        Self::timer_router()
    }
}

#[tool_router(router = timer_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_current_time_entry",
        description = "Get the currently running time entry"
    )]
    pub async fn get_current_time_entry(&self) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .timer
            .current()
            .await
            .map(TimerState::from)
            .map_err(ToolError::from);
        render("toggl_get_current_time_entry", outcome)
    }

    #[tool(
        name = "toggl_start_timer",
        description = "Start a new running time entry now. Does not stop a timer that is already running."
    )]
    pub async fn start_timer(
        &self,
        Parameters(params): Parameters<StartTimerParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .timer
            .start(StartTimer {
                description: params.description,
                project_id: params.project_id,
                task_id: params.task_id,
                tags: params.tags.unwrap_or_default(),
            })
            .await
            .map_err(ToolError::from);
        render("toggl_start_timer", outcome)
    }

    #[tool(
        name = "toggl_stop_timer",
        description = "Stop the currently running time entry. Does nothing if no timer is running."
    )]
    pub async fn stop_timer(&self) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .timer
            .stop()
            .await
            .map(TimerState::from)
            .map_err(ToolError::from);
        render("toggl_stop_timer", outcome)
    }
}
