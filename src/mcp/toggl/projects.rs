//! Project CRUD tools.

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
use crate::serde_utils::Patch;
use crate::toggl::TogglApi;
use crate::toggl::models::DEFAULT_PROJECT_COLOR;
use crate::toggl::requests::{NewProject, ProjectUpdate};

use super::TogglMcpServer;

/// Sentinel `client_id` that detaches a project from its client.
pub const CLEAR_CLIENT: i64 = -1;

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    DEFAULT_PROJECT_COLOR.to_string()
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Project name")]
    pub name: String,
    #[serde(default = "default_true")]
    #[schemars(description = "Whether the project is active (default: true)")]
    pub active: bool,
    #[serde(default = "default_color")]
    #[schemars(description = "Project color in hex format (default: \"#3750b5\")")]
    pub color: String,
    #[schemars(description = "Client ID to associate with the project")]
    pub client_id: Option<i64>,
    #[schemars(description = "Whether the project is billable")]
    pub billable: Option<bool>,
    #[serde(default)]
    #[schemars(description = "Whether the project is private (default: false)")]
    pub is_private: bool,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "ID of the project to update")]
    pub project_id: i64,
    #[schemars(description = "New project name")]
    pub name: Option<String>,
    #[schemars(description = "Whether the project is active")]
    pub active: Option<bool>,
    #[schemars(description = "New project color in hex format")]
    pub color: Option<String>,
    #[schemars(description = "New client ID; use -1 to remove the client")]
    pub client_id: Option<i64>,
    #[schemars(description = "Whether the project is billable")]
    pub billable: Option<bool>,
    #[schemars(description = "Whether the project is private")]
    pub is_private: Option<bool>,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn project_tools() -> ToolRouter<Self> {
        Self::project_router()
    }
}

#[tool_router(router = project_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_project",
        description = "Get details of a specific project"
    )]
    pub async fn get_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .projects
            .get(params.project_id)
            .await
            .map_err(ToolError::from)
            .and_then(|project| found(project, "Project not found"));
        render("toggl_get_project", outcome)
    }

    #[tool(name = "toggl_create_project", description = "Create a new project")]
    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = NewProject {
            name: params.name,
            active: params.active,
            color: params.color,
            client_id: params.client_id,
            billable: params.billable,
            is_private: params.is_private,
        };
        let outcome = self
            .services
            .projects
            .create(project)
            .await
            .map_err(ToolError::from);
        render("toggl_create_project", outcome)
    }

    #[tool(
        name = "toggl_update_project",
        description = "Update an existing project. Only the supplied fields change; client_id -1 removes the client."
    )]
    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let client_id = match params.client_id {
            Some(CLEAR_CLIENT) => Patch::Null,
            other => Patch::from_option(other),
        };
        let update = ProjectUpdate {
            name: params.name,
            active: params.active,
            color: params.color,
            client_id,
            billable: params.billable,
            is_private: params.is_private,
        };
        let outcome = self
            .services
            .projects
            .update(params.project_id, update)
            .await
            .map_err(ToolError::from);
        render("toggl_update_project", outcome)
    }

    #[tool(name = "toggl_delete_project", description = "Delete a project")]
    pub async fn delete_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.project_id;
        let outcome = self
            .services
            .projects
            .delete(id)
            .await
            .map(|ok| deleted(ok, "Project", id))
            .map_err(ToolError::from);
        render("toggl_delete_project", outcome)
    }
}
