//! Project membership, rates and labor costs.

use std::sync::Arc;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::ProjectUser;
use crate::toggl::requests::{NewProjectUser, ProjectUserUpdate};
use crate::toggl::resolver::WorkspaceResolver;

pub struct ProjectUserService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> ProjectUserService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    async fn workspace_id(&self) -> ServiceResult<i64> {
        self.workspace.resolve(self.api.as_ref()).await
    }

    pub async fn list(&self, project_id: Option<i64>) -> ServiceResult<Vec<ProjectUser>> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.get_project_users(workspace_id, project_id).await?)
    }

    pub async fn add(&self, member: NewProjectUser) -> ServiceResult<ProjectUser> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.add_project_user(workspace_id, &member).await?)
    }

    pub async fn update(
        &self,
        project_user_id: i64,
        update: ProjectUserUpdate,
    ) -> ServiceResult<ProjectUser> {
        let workspace_id = self.workspace_id().await?;
        Ok(self
            .api
            .update_project_user(workspace_id, project_user_id, &update)
            .await?)
    }

    pub async fn delete(&self, project_user_id: i64) -> ServiceResult<bool> {
        let workspace_id = self.workspace_id().await?;
        Ok(self
            .api
            .delete_project_user(workspace_id, project_user_id)
            .await?)
    }
}
