//! Toggl Track resource records as returned by the v9 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::serde_utils::null_as_default;

pub const DEFAULT_PROJECT_COLOR: &str = "#3750b5";

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    DEFAULT_PROJECT_COLOR.to_string()
}

/// A tracked span of time. A negative `duration` marks the running entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimeEntryWire")]
pub struct TimeEntry {
    pub id: i64,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub stop: Option<DateTime<Utc>>,
    pub duration: i64,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub workspace_id: i64,
    pub tags: Vec<String>,
    pub billable: bool,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.duration < 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectWire")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub workspace_id: i64,
    pub client_id: Option<i64>,
    pub active: bool,
    pub color: String,
    pub billable: Option<bool>,
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    pub workspace_id: i64,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub estimated_seconds: Option<i64>,
    #[serde(default)]
    pub tracked_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    pub organization_id: i64,
}

/// A customer record. The vendor names its workspace field `wid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClientWire")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub workspace_id: i64,
    pub archived: bool,
    pub notes: Option<String>,
    pub external_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub fullname: String,
    #[serde(default)]
    pub default_workspace_id: Option<i64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceUser {
    pub id: i64,
    pub email: String,
    pub fullname: String,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUser {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    pub workspace_id: i64,
    #[serde(default)]
    pub manager: bool,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub labor_cost: Option<f64>,
}

// The vendor sends the workspace as `workspace_id`, `wid`, or both. A serde
// alias rejects the "both" case as a duplicate field, so these records go
// through a wire shape that accepts either.

#[derive(Debug, Error)]
#[error("missing field `workspace_id` (or `wid`)")]
pub struct MissingWorkspace;

fn pick_workspace(workspace_id: Option<i64>, wid: Option<i64>) -> Result<i64, MissingWorkspace> {
    workspace_id.or(wid).ok_or(MissingWorkspace)
}

#[derive(Deserialize)]
struct TimeEntryWire {
    id: i64,
    #[serde(default)]
    description: Option<String>,
    start: DateTime<Utc>,
    #[serde(default)]
    stop: Option<DateTime<Utc>>,
    duration: i64,
    #[serde(default)]
    project_id: Option<i64>,
    #[serde(default)]
    task_id: Option<i64>,
    #[serde(default)]
    workspace_id: Option<i64>,
    #[serde(default)]
    wid: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    billable: bool,
}

impl TryFrom<TimeEntryWire> for TimeEntry {
    type Error = MissingWorkspace;

    fn try_from(wire: TimeEntryWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id,
            description: wire.description,
            start: wire.start,
            stop: wire.stop,
            duration: wire.duration,
            project_id: wire.project_id,
            task_id: wire.task_id,
            workspace_id: pick_workspace(wire.workspace_id, wire.wid)?,
            tags: wire.tags,
            billable: wire.billable,
        })
    }
}

#[derive(Deserialize)]
struct ProjectWire {
    id: i64,
    name: String,
    #[serde(default)]
    workspace_id: Option<i64>,
    #[serde(default)]
    wid: Option<i64>,
    #[serde(default)]
    client_id: Option<i64>,
    #[serde(default = "default_true")]
    active: bool,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default)]
    billable: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    is_private: bool,
}

impl TryFrom<ProjectWire> for Project {
    type Error = MissingWorkspace;

    fn try_from(wire: ProjectWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id,
            name: wire.name,
            workspace_id: pick_workspace(wire.workspace_id, wire.wid)?,
            client_id: wire.client_id,
            active: wire.active,
            color: wire.color,
            billable: wire.billable,
            is_private: wire.is_private,
        })
    }
}

#[derive(Deserialize)]
struct ClientWire {
    id: i64,
    name: String,
    #[serde(default)]
    workspace_id: Option<i64>,
    #[serde(default)]
    wid: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    archived: bool,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    external_reference: Option<String>,
}

impl TryFrom<ClientWire> for Client {
    type Error = MissingWorkspace;

    fn try_from(wire: ClientWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id,
            name: wire.name,
            workspace_id: pick_workspace(wire.workspace_id, wire.wid)?,
            archived: wire.archived,
            notes: wire.notes,
            external_reference: wire.external_reference,
        })
    }
}
