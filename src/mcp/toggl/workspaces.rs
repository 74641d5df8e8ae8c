//! Account and workspace tools.

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

use super::TogglMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceIdParams {
    #[schemars(description = "Workspace ID (uses the default workspace if not provided)")]
    pub workspace_id: Option<i64>,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn workspace_tools() -> ToolRouter<Self> {
        Self::workspace_router()
    }
}

#[tool_router(router = workspace_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_current_user",
        description = "Get the authenticated user's profile"
    )]
    pub async fn get_current_user(&self) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .workspaces
            .current_user()
            .await
            .map_err(ToolError::from);
        render("toggl_get_current_user", outcome)
    }

    #[tool(
        name = "toggl_get_workspaces",
        description = "Get available workspaces"
    )]
    pub async fn get_workspaces(&self) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .workspaces
            .workspaces()
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("toggl_get_workspaces", outcome)
    }

    #[tool(
        name = "toggl_get_projects",
        description = "Get projects for a workspace"
    )]
    pub async fn get_projects(
        &self,
        Parameters(params): Parameters<WorkspaceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .workspaces
            .projects(params.workspace_id)
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("toggl_get_projects", outcome)
    }

    #[tool(
        name = "toggl_get_workspace_users",
        description = "Get the members of a workspace"
    )]
    pub async fn get_workspace_users(
        &self,
        Parameters(params): Parameters<WorkspaceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .workspaces
            .users(params.workspace_id)
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("toggl_get_workspace_users", outcome)
    }
}
