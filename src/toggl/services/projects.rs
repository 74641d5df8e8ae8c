//! Project CRUD in the resolved workspace.

use std::sync::Arc;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::Project;
use crate::toggl::requests::{NewProject, ProjectUpdate};
use crate::toggl::resolver::WorkspaceResolver;

pub struct ProjectService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> ProjectService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    async fn workspace_id(&self) -> ServiceResult<i64> {
        self.workspace.resolve(self.api.as_ref()).await
    }

    pub async fn get(&self, project_id: i64) -> ServiceResult<Option<Project>> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.get_project(workspace_id, project_id).await?)
    }

    pub async fn create(&self, project: NewProject) -> ServiceResult<Project> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.create_project(workspace_id, &project).await?)
    }

    pub async fn update(&self, project_id: i64, update: ProjectUpdate) -> ServiceResult<Project> {
        let workspace_id = self.workspace_id().await?;
        Ok(self
            .api
            .update_project(workspace_id, project_id, &update)
            .await?)
    }

    pub async fn delete(&self, project_id: i64) -> ServiceResult<bool> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.delete_project(workspace_id, project_id).await?)
    }
}
