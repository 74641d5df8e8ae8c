//! HTTP client for the Toggl Track v9 REST API.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::http::{self, ApiResult, Vendor};

use super::models::{
    Client, CurrentUser, Project, ProjectUser, Task, TimeEntry, Workspace, WorkspaceUser,
};
use super::requests::{
    CREATED_WITH, ClientFilter, ClientRestore, ClientUpdate, NewClient, NewProject, NewProjectUser,
    NewTask, NewTimeEntry, ProjectUpdate, ProjectUserUpdate, TaskUpdate, TimeEntryUpdate,
};

#[cfg(test)]
use mockall::automock;

/// Toggl endpoints used by the service layer. Can be mocked in tests.
///
/// Get-by-id methods return `Ok(None)` on a vendor 404. Delete methods
/// return whether the vendor answered 200/204.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TogglApi: Send + Sync {
    async fn get_current_user(&self) -> ApiResult<CurrentUser>;
    async fn get_workspaces(&self) -> ApiResult<Vec<Workspace>>;
    async fn get_workspace_users(&self, workspace_id: i64) -> ApiResult<Vec<WorkspaceUser>>;

    async fn get_time_entries(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> ApiResult<Vec<TimeEntry>>;
    /// `Ok(None)` when nothing is running (empty or `null` body).
    async fn get_current_time_entry(&self) -> ApiResult<Option<TimeEntry>>;
    async fn get_time_entry(&self, time_entry_id: i64) -> ApiResult<Option<TimeEntry>>;
    async fn create_time_entry(
        &self,
        workspace_id: i64,
        entry: &NewTimeEntry,
    ) -> ApiResult<TimeEntry>;
    async fn update_time_entry(
        &self,
        workspace_id: i64,
        time_entry_id: i64,
        update: &TimeEntryUpdate,
    ) -> ApiResult<TimeEntry>;
    async fn stop_time_entry(&self, workspace_id: i64, time_entry_id: i64) -> ApiResult<TimeEntry>;
    async fn delete_time_entry(&self, workspace_id: i64, time_entry_id: i64) -> ApiResult<bool>;

    async fn get_projects(&self, workspace_id: i64) -> ApiResult<Vec<Project>>;
    async fn get_project(&self, workspace_id: i64, project_id: i64) -> ApiResult<Option<Project>>;
    async fn create_project(&self, workspace_id: i64, project: &NewProject) -> ApiResult<Project>;
    async fn update_project(
        &self,
        workspace_id: i64,
        project_id: i64,
        update: &ProjectUpdate,
    ) -> ApiResult<Project>;
    async fn delete_project(&self, workspace_id: i64, project_id: i64) -> ApiResult<bool>;

    async fn get_tasks(
        &self,
        workspace_id: i64,
        project_id: i64,
        active: Option<bool>,
    ) -> ApiResult<Vec<Task>>;
    async fn get_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task_id: i64,
    ) -> ApiResult<Option<Task>>;
    async fn create_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task: &NewTask,
    ) -> ApiResult<Task>;
    async fn update_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task_id: i64,
        update: &TaskUpdate,
    ) -> ApiResult<Task>;
    async fn delete_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task_id: i64,
    ) -> ApiResult<bool>;

    async fn get_clients(&self, workspace_id: i64, filter: &ClientFilter)
    -> ApiResult<Vec<Client>>;
    async fn get_client(&self, workspace_id: i64, client_id: i64) -> ApiResult<Option<Client>>;
    async fn create_client(&self, workspace_id: i64, client: &NewClient) -> ApiResult<Client>;
    async fn update_client(
        &self,
        workspace_id: i64,
        client_id: i64,
        update: &ClientUpdate,
    ) -> ApiResult<Client>;
    async fn delete_client(&self, workspace_id: i64, client_id: i64) -> ApiResult<bool>;
    /// Returns the ids of the projects archived along with the client.
    async fn archive_client(&self, workspace_id: i64, client_id: i64) -> ApiResult<Vec<i64>>;
    async fn restore_client(
        &self,
        workspace_id: i64,
        client_id: i64,
        restore: &ClientRestore,
    ) -> ApiResult<Client>;

    async fn get_project_users(
        &self,
        workspace_id: i64,
        project_id: Option<i64>,
    ) -> ApiResult<Vec<ProjectUser>>;
    async fn add_project_user(
        &self,
        workspace_id: i64,
        member: &NewProjectUser,
    ) -> ApiResult<ProjectUser>;
    async fn update_project_user(
        &self,
        workspace_id: i64,
        project_user_id: i64,
        update: &ProjectUserUpdate,
    ) -> ApiResult<ProjectUser>;
    async fn delete_project_user(&self, workspace_id: i64, project_user_id: i64)
    -> ApiResult<bool>;
}

/// Request body for a new entry; the vendor wants the workspace repeated.
#[derive(Serialize)]
struct CreateEntryBody<'a> {
    #[serde(flatten)]
    entry: &'a NewTimeEntry,
    workspace_id: i64,
    created_with: &'static str,
}

#[derive(Serialize)]
struct CreateProjectUserBody<'a> {
    #[serde(flatten)]
    member: &'a NewProjectUser,
    workspace_id: i64,
}

/// Toggl API client. Authenticates every request with the API token.
#[derive(Clone)]
pub struct TogglClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl TogglClient {
    pub fn new(api_token: impl Into<String>, base_url: impl Into<String>) -> ApiResult<Self> {
        Ok(Self {
            client: http::build_client(Vendor::Toggl)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        })
    }

    /// Release the connection pool. Consumes the client.
    pub fn close(self) {
        tracing::debug!("closing Toggl client");
        drop(self.client);
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "toggl request");
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .basic_auth(&self.api_token, Some("api_token"))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<reqwest::Response> {
        http::send(Vendor::Toggl, request).await
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        http::handle_response(Vendor::Toggl, response).await
    }

    async fn fetch_optional<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<Option<T>> {
        let response = self.send(request).await?;
        http::handle_optional(Vendor::Toggl, response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<bool> {
        let response = self.send(self.request(Method::DELETE, path)).await?;
        http::handle_deleted(Vendor::Toggl, response).await
    }
}

fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl TogglApi for TogglClient {
    async fn get_current_user(&self) -> ApiResult<CurrentUser> {
        self.fetch(self.request(Method::GET, "/me")).await
    }

    async fn get_workspaces(&self) -> ApiResult<Vec<Workspace>> {
        self.fetch(self.request(Method::GET, "/workspaces")).await
    }

    async fn get_workspace_users(&self, workspace_id: i64) -> ApiResult<Vec<WorkspaceUser>> {
        let path = format!("/workspaces/{workspace_id}/users");
        self.fetch(self.request(Method::GET, &path)).await
    }

    async fn get_time_entries(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> ApiResult<Vec<TimeEntry>> {
        let request = self.request(Method::GET, "/me/time_entries").query(&[
            ("start_date", rfc3339(start_date)),
            ("end_date", rfc3339(end_date)),
        ]);
        self.fetch(request).await
    }

    async fn get_current_time_entry(&self) -> ApiResult<Option<TimeEntry>> {
        let response = self
            .send(self.request(Method::GET, "/me/time_entries/current"))
            .await?;
        http::handle_maybe_empty(Vendor::Toggl, response).await
    }

    async fn get_time_entry(&self, time_entry_id: i64) -> ApiResult<Option<TimeEntry>> {
        let path = format!("/me/time_entries/{time_entry_id}");
        self.fetch_optional(self.request(Method::GET, &path)).await
    }

    async fn create_time_entry(
        &self,
        workspace_id: i64,
        entry: &NewTimeEntry,
    ) -> ApiResult<TimeEntry> {
        let path = format!("/workspaces/{workspace_id}/time_entries");
        let body = CreateEntryBody {
            entry,
            workspace_id,
            created_with: CREATED_WITH,
        };
        self.fetch(self.request(Method::POST, &path).json(&body))
            .await
    }

    async fn update_time_entry(
        &self,
        workspace_id: i64,
        time_entry_id: i64,
        update: &TimeEntryUpdate,
    ) -> ApiResult<TimeEntry> {
        let path = format!("/workspaces/{workspace_id}/time_entries/{time_entry_id}");
        self.fetch(self.request(Method::PUT, &path).json(update))
            .await
    }

    async fn stop_time_entry(&self, workspace_id: i64, time_entry_id: i64) -> ApiResult<TimeEntry> {
        let path = format!("/workspaces/{workspace_id}/time_entries/{time_entry_id}/stop");
        self.fetch(self.request(Method::PATCH, &path)).await
    }

    async fn delete_time_entry(&self, workspace_id: i64, time_entry_id: i64) -> ApiResult<bool> {
        self.delete(&format!(
            "/workspaces/{workspace_id}/time_entries/{time_entry_id}"
        ))
        .await
    }

    async fn get_projects(&self, workspace_id: i64) -> ApiResult<Vec<Project>> {
        let path = format!("/workspaces/{workspace_id}/projects");
        self.fetch(self.request(Method::GET, &path)).await
    }

    async fn get_project(&self, workspace_id: i64, project_id: i64) -> ApiResult<Option<Project>> {
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}");
        self.fetch_optional(self.request(Method::GET, &path)).await
    }

    async fn create_project(&self, workspace_id: i64, project: &NewProject) -> ApiResult<Project> {
        let path = format!("/workspaces/{workspace_id}/projects");
        self.fetch(self.request(Method::POST, &path).json(project))
            .await
    }

    async fn update_project(
        &self,
        workspace_id: i64,
        project_id: i64,
        update: &ProjectUpdate,
    ) -> ApiResult<Project> {
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}");
        self.fetch(self.request(Method::PUT, &path).json(update))
            .await
    }

    async fn delete_project(&self, workspace_id: i64, project_id: i64) -> ApiResult<bool> {
        self.delete(&format!("/workspaces/{workspace_id}/projects/{project_id}"))
            .await
    }

    async fn get_tasks(
        &self,
        workspace_id: i64,
        project_id: i64,
        active: Option<bool>,
    ) -> ApiResult<Vec<Task>> {
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}/tasks");
        let mut request = self.request(Method::GET, &path);
        if let Some(active) = active {
            request = request.query(&[("active", active)]);
        }
        self.fetch(request).await
    }

    async fn get_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task_id: i64,
    ) -> ApiResult<Option<Task>> {
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}");
        self.fetch_optional(self.request(Method::GET, &path)).await
    }

    async fn create_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task: &NewTask,
    ) -> ApiResult<Task> {
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}/tasks");
        self.fetch(self.request(Method::POST, &path).json(task))
            .await
    }

    async fn update_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task_id: i64,
        update: &TaskUpdate,
    ) -> ApiResult<Task> {
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}");
        self.fetch(self.request(Method::PUT, &path).json(update))
            .await
    }

    async fn delete_task(
        &self,
        workspace_id: i64,
        project_id: i64,
        task_id: i64,
    ) -> ApiResult<bool> {
        self.delete(&format!(
            "/workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}"
        ))
        .await
    }

    async fn get_clients(
        &self,
        workspace_id: i64,
        filter: &ClientFilter,
    ) -> ApiResult<Vec<Client>> {
        let path = format!("/workspaces/{workspace_id}/clients");
        self.fetch(self.request(Method::GET, &path).query(filter))
            .await
    }

    async fn get_client(&self, workspace_id: i64, client_id: i64) -> ApiResult<Option<Client>> {
        let path = format!("/workspaces/{workspace_id}/clients/{client_id}");
        self.fetch_optional(self.request(Method::GET, &path)).await
    }

    async fn create_client(&self, workspace_id: i64, client: &NewClient) -> ApiResult<Client> {
        let path = format!("/workspaces/{workspace_id}/clients");
        self.fetch(self.request(Method::POST, &path).json(client))
            .await
    }

    async fn update_client(
        &self,
        workspace_id: i64,
        client_id: i64,
        update: &ClientUpdate,
    ) -> ApiResult<Client> {
        let path = format!("/workspaces/{workspace_id}/clients/{client_id}");
        self.fetch(self.request(Method::PUT, &path).json(update))
            .await
    }

    async fn delete_client(&self, workspace_id: i64, client_id: i64) -> ApiResult<bool> {
        self.delete(&format!("/workspaces/{workspace_id}/clients/{client_id}"))
            .await
    }

    async fn archive_client(&self, workspace_id: i64, client_id: i64) -> ApiResult<Vec<i64>> {
        let path = format!("/workspaces/{workspace_id}/clients/{client_id}/archive");
        self.fetch(self.request(Method::POST, &path)).await
    }

    async fn restore_client(
        &self,
        workspace_id: i64,
        client_id: i64,
        restore: &ClientRestore,
    ) -> ApiResult<Client> {
        let path = format!("/workspaces/{workspace_id}/clients/{client_id}/restore");
        self.fetch(self.request(Method::POST, &path).json(restore))
            .await
    }

    async fn get_project_users(
        &self,
        workspace_id: i64,
        project_id: Option<i64>,
    ) -> ApiResult<Vec<ProjectUser>> {
        let path = format!("/workspaces/{workspace_id}/project_users");
        let mut request = self.request(Method::GET, &path);
        if let Some(project_id) = project_id {
            request = request.query(&[("project_ids", project_id)]);
        }
        self.fetch(request).await
    }

    async fn add_project_user(
        &self,
        workspace_id: i64,
        member: &NewProjectUser,
    ) -> ApiResult<ProjectUser> {
        let path = format!("/workspaces/{workspace_id}/project_users");
        let body = CreateProjectUserBody {
            member,
            workspace_id,
        };
        self.fetch(self.request(Method::POST, &path).json(&body))
            .await
    }

    async fn update_project_user(
        &self,
        workspace_id: i64,
        project_user_id: i64,
        update: &ProjectUserUpdate,
    ) -> ApiResult<ProjectUser> {
        let path = format!("/workspaces/{workspace_id}/project_users/{project_user_id}");
        self.fetch(self.request(Method::PUT, &path).json(update))
            .await
    }

    async fn delete_project_user(
        &self,
        workspace_id: i64,
        project_user_id: i64,
    ) -> ApiResult<bool> {
        self.delete(&format!(
            "/workspaces/{workspace_id}/project_users/{project_user_id}"
        ))
        .await
    }
}
