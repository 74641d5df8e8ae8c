//! Client (customer) tools.

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

use crate::mcp::envelope::{ToolError, deleted, found, listing, render};
use crate::toggl::TogglApi;
use crate::toggl::requests::{ClientFilter, ClientStatus, ClientUpdate, NewClient};

use super::TogglMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetClientsParams {
    #[schemars(description = "Filter by status: \"active\" (default), \"archived\" or \"both\"")]
    pub status: Option<ClientStatus>,
    #[schemars(description = "Case-insensitive filter on the client name")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ClientIdParams {
    #[schemars(description = "Client ID")]
    pub client_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateClientParams {
    #[schemars(description = "Client name")]
    pub name: String,
    #[schemars(description = "Notes about the client")]
    pub notes: Option<String>,
    #[schemars(description = "External reference, e.g. an ID in a billing system")]
    pub external_reference: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateClientParams {
    #[schemars(description = "ID of the client to update")]
    pub client_id: i64,
    #[schemars(description = "New client name")]
    pub name: Option<String>,
    #[schemars(description = "New notes")]
    pub notes: Option<String>,
    #[schemars(description = "New external reference")]
    pub external_reference: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RestoreClientParams {
    #[schemars(description = "ID of the archived client to restore")]
    pub client_id: i64,
    #[serde(default)]
    #[schemars(
        description = "Restore every project of the client (default: false). Takes precedence over project_ids."
    )]
    pub restore_all_projects: bool,
    #[schemars(description = "Specific project IDs to restore with the client")]
    pub project_ids: Option<Vec<i64>>,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub(super) fn client_tools() -> ToolRouter<Self> {
        Self::client_router()
    }
}

#[tool_router(router = client_router)]
impl<A: TogglApi + 'static> TogglMcpServer<A> {
    #[tool(
        name = "toggl_get_clients",
        description = "List clients in the workspace"
    )]
    pub async fn get_clients(
        &self,
        Parameters(params): Parameters<GetClientsParams>,
    ) -> Result<CallToolResult, McpError> {
        let filter = ClientFilter {
            status: params.status,
            name: params.name,
        };
        let outcome = self
            .services
            .clients
            .list(filter)
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("toggl_get_clients", outcome)
    }

    #[tool(
        name = "toggl_get_client",
        description = "Get details of a specific client"
    )]
    pub async fn get_client(
        &self,
        Parameters(params): Parameters<ClientIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .clients
            .get(params.client_id)
            .await
            .map_err(ToolError::from)
            .and_then(|client| found(client, "Client not found"));
        render("toggl_get_client", outcome)
    }

    #[tool(name = "toggl_create_client", description = "Create a new client")]
    pub async fn create_client(
        &self,
        Parameters(params): Parameters<CreateClientParams>,
    ) -> Result<CallToolResult, McpError> {
        let client = NewClient {
            name: params.name,
            notes: params.notes,
            external_reference: params.external_reference,
        };
        let outcome = self
            .services
            .clients
            .create(client)
            .await
            .map_err(ToolError::from);
        render("toggl_create_client", outcome)
    }

    #[tool(
        name = "toggl_update_client",
        description = "Update an existing client"
    )]
    pub async fn update_client(
        &self,
        Parameters(params): Parameters<UpdateClientParams>,
    ) -> Result<CallToolResult, McpError> {
        let update = ClientUpdate {
            name: params.name,
            notes: params.notes,
            external_reference: params.external_reference,
        };
        let outcome = self
            .services
            .clients
            .update(params.client_id, update)
            .await
            .map_err(ToolError::from);
        render("toggl_update_client", outcome)
    }

    #[tool(name = "toggl_delete_client", description = "Delete a client")]
    pub async fn delete_client(
        &self,
        Parameters(params): Parameters<ClientIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.client_id;
        let outcome = self
            .services
            .clients
            .delete(id)
            .await
            .map(|ok| deleted(ok, "Client", id))
            .map_err(ToolError::from);
        render("toggl_delete_client", outcome)
    }

    #[tool(
        name = "toggl_archive_client",
        description = "Archive a client and all of its projects"
    )]
    pub async fn archive_client(
        &self,
        Parameters(params): Parameters<ClientIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.client_id;
        let outcome = self
            .services
            .clients
            .archive(id)
            .await
            .map(|project_ids| {
                json!({
                    "success": true,
                    "message": format!("Client {id} archived successfully"),
                    "archived_project_ids": project_ids,
                })
            })
            .map_err(ToolError::from);
        render("toggl_archive_client", outcome)
    }

    #[tool(
        name = "toggl_restore_client",
        description = "Restore an archived client, optionally with all or some of its projects"
    )]
    pub async fn restore_client(
        &self,
        Parameters(params): Parameters<RestoreClientParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .clients
            .restore(
                params.client_id,
                params.restore_all_projects,
                params.project_ids,
            )
            .await
            .map_err(ToolError::from);
        render("toggl_restore_client", outcome)
    }
}
