//! Account and workspace lookups.

use std::sync::Arc;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::{CurrentUser, Project, Workspace, WorkspaceUser};
use crate::toggl::resolver::WorkspaceResolver;

pub struct WorkspaceService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> WorkspaceService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    pub async fn current_user(&self) -> ServiceResult<CurrentUser> {
        Ok(self.api.get_current_user().await?)
    }

    pub async fn workspaces(&self) -> ServiceResult<Vec<Workspace>> {
        Ok(self.api.get_workspaces().await?)
    }

    pub async fn projects(&self, workspace_id: Option<i64>) -> ServiceResult<Vec<Project>> {
        let workspace_id = self
            .workspace
            .resolve_or(self.api.as_ref(), workspace_id)
            .await?;
        Ok(self.api.get_projects(workspace_id).await?)
    }

    pub async fn users(&self, workspace_id: Option<i64>) -> ServiceResult<Vec<WorkspaceUser>> {
        let workspace_id = self
            .workspace
            .resolve_or(self.api.as_ref(), workspace_id)
            .await?;
        Ok(self.api.get_workspace_users(workspace_id).await?)
    }
}
