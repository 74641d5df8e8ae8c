//! Task CRUD and cross-project listing.

use std::sync::Arc;

use serde::Serialize;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::Task;
use crate::toggl::requests::{NewTask, TaskUpdate};
use crate::toggl::resolver::WorkspaceResolver;

use super::units::hours_to_seconds;

/// A project whose tasks could not be fetched during a workspace-wide listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedProject {
    pub project_id: i64,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskListing {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedProject>,
}

pub struct TaskService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> TaskService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    async fn workspace_id(&self) -> ServiceResult<i64> {
        self.workspace.resolve(self.api.as_ref()).await
    }

    /// Tasks of one project, or of every project in the workspace.
    ///
    /// In the workspace-wide case a project whose task fetch fails is
    /// recorded in `skipped` and the listing carries on.
    pub async fn list(
        &self,
        project_id: Option<i64>,
        active: Option<bool>,
    ) -> ServiceResult<TaskListing> {
        let workspace_id = self.workspace_id().await?;

        if let Some(project_id) = project_id {
            let tasks = self.api.get_tasks(workspace_id, project_id, active).await?;
            return Ok(TaskListing {
                tasks,
                skipped: Vec::new(),
            });
        }

        let mut listing = TaskListing::default();
        for project in self.api.get_projects(workspace_id).await? {
            match self.api.get_tasks(workspace_id, project.id, active).await {
                Ok(tasks) => listing.tasks.extend(tasks),
                Err(e) => {
                    tracing::warn!(project_id = project.id, error = %e, "skipping project tasks");
                    listing.skipped.push(SkippedProject {
                        project_id: project.id,
                        error: e.to_string(),
                    });
                }
            }
        }
        Ok(listing)
    }

    pub async fn get(&self, project_id: i64, task_id: i64) -> ServiceResult<Option<Task>> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.get_task(workspace_id, project_id, task_id).await?)
    }

    pub async fn create(
        &self,
        project_id: i64,
        name: String,
        estimated_hours: Option<f64>,
        active: bool,
    ) -> ServiceResult<Task> {
        let estimated_seconds = estimated_hours.map(hours_to_seconds).transpose()?;
        let workspace_id = self.workspace_id().await?;
        let task = NewTask {
            name,
            active,
            estimated_seconds,
        };
        Ok(self
            .api
            .create_task(workspace_id, project_id, &task)
            .await?)
    }

    pub async fn update(
        &self,
        project_id: i64,
        task_id: i64,
        name: Option<String>,
        estimated_hours: Option<f64>,
        active: Option<bool>,
    ) -> ServiceResult<Task> {
        let estimated_seconds = estimated_hours.map(hours_to_seconds).transpose()?;
        let workspace_id = self.workspace_id().await?;
        let update = TaskUpdate {
            name,
            active,
            estimated_seconds,
        };
        Ok(self
            .api
            .update_task(workspace_id, project_id, task_id, &update)
            .await?)
    }

    pub async fn delete(&self, project_id: i64, task_id: i64) -> ServiceResult<bool> {
        let workspace_id = self.workspace_id().await?;
        Ok(self
            .api
            .delete_task(workspace_id, project_id, task_id)
            .await?)
    }
}
