//! Reporting tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::envelope::{ToolError, listing, render};
use crate::toggl::TogglApi;
use crate::toggl::services::analytics::DEFAULT_DAYS_BACK;

use super::TogglMcpServer;

fn default_days_back() -> u32 {
    DEFAULT_DAYS_BACK
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DaysBackParams {
    #[serde(default = "default_days_back")]
    #[schemars(description = "Number of days back to look (default: 7)")]
    pub days_back: u32,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn analytics_tools() -> ToolRouter<Self> {
        Self::analytics_router()
    }
}

#[tool_router(router = analytics_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_time_entries",
        description = "Get time entries started within the last N days (default: 7)"
    )]
    pub async fn get_time_entries(
        &self,
        Parameters(params): Parameters<DaysBackParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .analytics
            .entries(params.days_back)
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("toggl_get_time_entries", outcome)
    }

    #[tool(
        name = "toggl_get_time_summary",
        description = "Summarize time tracked in the last N days (default: 7): total hours, entry count and hours per project. Running entries count as entries but add no hours."
    )]
    pub async fn get_time_summary(
        &self,
        Parameters(params): Parameters<DaysBackParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .analytics
            .summary(params.days_back)
            .await
            .map_err(ToolError::from);
        render("toggl_get_time_summary", outcome)
    }
}
