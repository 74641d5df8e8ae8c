//! Customer (client) management, including archive and restore.

use std::sync::Arc;

use crate::error::ServiceResult;
use crate::toggl::client::TogglApi;
use crate::toggl::models::Client;
use crate::toggl::requests::{ClientFilter, ClientRestore, ClientUpdate, NewClient};
use crate::toggl::resolver::WorkspaceResolver;

pub struct ClientService<A> {
    api: Arc<A>,
    workspace: WorkspaceResolver,
}

impl<A: TogglApi> ClientService<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self { api, workspace }
    }

    async fn workspace_id(&self) -> ServiceResult<i64> {
        self.workspace.resolve(self.api.as_ref()).await
    }

    pub async fn list(&self, filter: ClientFilter) -> ServiceResult<Vec<Client>> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.get_clients(workspace_id, &filter).await?)
    }

    pub async fn get(&self, client_id: i64) -> ServiceResult<Option<Client>> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.get_client(workspace_id, client_id).await?)
    }

    pub async fn create(&self, client: NewClient) -> ServiceResult<Client> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.create_client(workspace_id, &client).await?)
    }

    pub async fn update(&self, client_id: i64, update: ClientUpdate) -> ServiceResult<Client> {
        let workspace_id = self.workspace_id().await?;
        Ok(self
            .api
            .update_client(workspace_id, client_id, &update)
            .await?)
    }

    pub async fn delete(&self, client_id: i64) -> ServiceResult<bool> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.delete_client(workspace_id, client_id).await?)
    }

    /// Archive the client and its projects. Returns the archived project ids.
    pub async fn archive(&self, client_id: i64) -> ServiceResult<Vec<i64>> {
        let workspace_id = self.workspace_id().await?;
        Ok(self.api.archive_client(workspace_id, client_id).await?)
    }

    /// Restore an archived client. `restore_all_projects` takes precedence
    /// over an explicit `project_ids` list.
    pub async fn restore(
        &self,
        client_id: i64,
        restore_all_projects: bool,
        project_ids: Option<Vec<i64>>,
    ) -> ServiceResult<Client> {
        let restore = restore_mode(client_id, restore_all_projects, project_ids);
        let workspace_id = self.workspace_id().await?;
        Ok(self
            .api
            .restore_client(workspace_id, client_id, &restore)
            .await?)
    }
}

fn restore_mode(
    client_id: i64,
    restore_all_projects: bool,
    project_ids: Option<Vec<i64>>,
) -> ClientRestore {
    let project_ids = project_ids.filter(|ids| !ids.is_empty());
    match (restore_all_projects, project_ids) {
        (true, Some(ids)) => {
            tracing::warn!(
                client_id,
                ignored = ?ids,
                "restore_all_projects set; ignoring explicit project_ids"
            );
            ClientRestore::AllProjects {
                restore_all_projects: true,
            }
        }
        (true, None) => ClientRestore::AllProjects {
            restore_all_projects: true,
        },
        (false, Some(projects)) => ClientRestore::Projects { projects },
        (false, None) => ClientRestore::ClientOnly {},
    }
}
