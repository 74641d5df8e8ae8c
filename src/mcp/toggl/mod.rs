//! Toggl Track MCP server.
//!
//! Tools are grouped by category, one file and one router per category,
//! combined into the server's router in [`TogglMcpServer::new`].

mod analytics;
mod clients;
mod entries;
mod project_users;
mod projects;
mod tasks;
mod timer;
mod workspaces;

#[cfg(test)]
mod clients_test;

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::toggl::{TogglApi, TogglServices, WorkspaceResolver};

pub use analytics::DaysBackParams;
pub use clients::{
    ClientIdParams, CreateClientParams, GetClientsParams, RestoreClientParams, UpdateClientParams,
};
pub use entries::{CreateTimeEntryParams, TimeEntryIdParams, UpdateTimeEntryParams};
pub use project_users::{
    AddProjectUserParams, GetProjectUsersParams, ProjectUserIdParams, UpdateProjectUserParams,
};
pub use projects::{CreateProjectParams, ProjectIdParams, UpdateProjectParams};
pub use tasks::{CreateTaskParams, GetTasksParams, TaskRefParams, UpdateTaskParams};
pub use timer::StartTimerParams;
pub use workspaces::WorkspaceIdParams;

/// Toggl MCP server, generic over the API seam so tests can mock the vendor.
pub struct TogglMcpServer<A: TogglApi> {
    services: Arc<TogglServices<A>>,
    tool_router: ToolRouter<Self>,
}

impl<A: TogglApi + 'static> TogglMcpServer<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self::from_services(Arc::new(TogglServices::new(api, workspace)))
    }

    fn from_services(services: Arc<TogglServices<A>>) -> Self {
        Self {
            services,
            tool_router: Self::timer_tools()
                + Self::entry_tools()
                + Self::analytics_tools()
                + Self::workspace_tools()
                + Self::project_tools()
                + Self::task_tools()
                + Self::client_tools()
                + Self::project_user_tools(),
        }
    }

    pub(crate) fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

impl<A: TogglApi + 'static> Clone for TogglMcpServer<A> {
    fn clone(&self) -> Self {
        Self::from_services(Arc::clone(&self.services))
    }
}

#[tool_handler(router = self.tool_router)]
impl<A: TogglApi + 'static> ServerHandler for TogglMcpServer<A> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Toggl Track time tracking. Start and stop timers, log completed entries \
                 (durations in minutes), summarize recent time, and manage projects, tasks \
                 (estimates in hours), clients and project members. Operations without an \
                 explicit workspace use the configured default workspace.",
        )
    }
}
