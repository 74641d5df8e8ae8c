//! Project membership tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::envelope::{ToolError, deleted, listing, render};
use crate::toggl::TogglApi;
use crate::toggl::requests::{NewProjectUser, ProjectUserUpdate, RateChangeMode};

use super::TogglMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectUsersParams {
    #[schemars(description = "Only members of this project")]
    pub project_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddProjectUserParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "User ID to add to the project")]
    pub user_id: i64,
    #[serde(default)]
    #[schemars(description = "Whether the user manages the project (default: false)")]
    pub manager: bool,
    #[schemars(description = "Hourly billable rate for this user on the project")]
    pub rate: Option<f64>,
    #[schemars(description = "Hourly labor cost for this user on the project")]
    pub labor_cost: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectUserParams {
    #[schemars(description = "Project user (membership) ID")]
    pub project_user_id: i64,
    #[schemars(description = "Whether the user manages the project")]
    pub manager: Option<bool>,
    #[schemars(description = "New hourly billable rate")]
    pub rate: Option<f64>,
    #[schemars(
        description = "How the rate change applies: \"start-today\", \"override-current\" or \"override-all\""
    )]
    pub rate_change_mode: Option<RateChangeMode>,
    #[schemars(description = "New hourly labor cost")]
    pub labor_cost: Option<f64>,
    #[schemars(
        description = "How the labor cost change applies: \"start-today\", \"override-current\" or \"override-all\""
    )]
    pub labor_cost_change_mode: Option<RateChangeMode>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectUserIdParams {
    #[schemars(description = "Project user (membership) ID")]
    pub project_user_id: i64,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn project_user_tools() -> ToolRouter<Self> {
        Self::project_user_router()
    }
}

#[tool_router(router = project_user_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_project_users",
        description = "List project members in the workspace, optionally for one project"
    )]
    pub async fn get_project_users(
        &self,
        Parameters(params): Parameters<GetProjectUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .project_users
            .list(params.project_id)
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("toggl_get_project_users", outcome)
    }

    #[tool(
        name = "toggl_add_project_user",
        description = "Add a user to a project"
    )]
    pub async fn add_project_user(
        &self,
        Parameters(params): Parameters<AddProjectUserParams>,
    ) -> Result<CallToolResult, McpError> {
        let member = NewProjectUser {
            project_id: params.project_id,
            user_id: params.user_id,
            manager: params.manager,
            rate: params.rate,
            labor_cost: params.labor_cost,
        };
        let outcome = self
            .services
            .project_users
            .add(member)
            .await
            .map_err(ToolError::from);
        render("toggl_add_project_user", outcome)
    }

    #[tool(
        name = "toggl_update_project_user",
        description = "Update a project member's role, rate or labor cost"
    )]
    pub async fn update_project_user(
        &self,
        Parameters(params): Parameters<UpdateProjectUserParams>,
    ) -> Result<CallToolResult, McpError> {
        let update = ProjectUserUpdate {
            manager: params.manager,
            rate: params.rate,
            rate_change_mode: params.rate_change_mode,
            labor_cost: params.labor_cost,
            labor_cost_change_mode: params.labor_cost_change_mode,
        };
        let outcome = self
            .services
            .project_users
            .update(params.project_user_id, update)
            .await
            .map_err(ToolError::from);
        render("toggl_update_project_user", outcome)
    }

    #[tool(
        name = "toggl_delete_project_user",
        description = "Remove a user from a project"
    )]
    pub async fn delete_project_user(
        &self,
        Parameters(params): Parameters<ProjectUserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.project_user_id;
        let outcome = self
            .services
            .project_users
            .delete(id)
            .await
            .map(|ok| deleted(ok, "Project user", id))
            .map_err(ToolError::from);
        render("toggl_delete_project_user", outcome)
    }
}
