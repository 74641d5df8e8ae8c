//! Record builders shared by Toggl tests.

use chrono::{Duration, TimeZone, Utc};

use super::models::{Client, Project, ProjectUser, Task, TimeEntry, Workspace};

pub fn workspace(id: i64) -> Workspace {
    Workspace {
        id,
        name: format!("Workspace {id}"),
        organization_id: 1,
    }
}

/// A stopped entry when `duration >= 0`, a running one otherwise.
pub fn entry(id: i64, duration: i64, project_id: Option<i64>) -> TimeEntry {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    TimeEntry {
        id,
        description: Some(format!("Entry {id}")),
        start,
        stop: (duration >= 0).then(|| start + Duration::seconds(duration)),
        duration,
        project_id,
        task_id: None,
        workspace_id: 12345,
        tags: Vec::new(),
        billable: false,
    }
}

pub fn project(id: i64) -> Project {
    Project {
        id,
        name: format!("Project {id}"),
        workspace_id: 12345,
        client_id: None,
        active: true,
        color: "#3750b5".to_string(),
        billable: None,
        is_private: false,
    }
}

pub fn task(id: i64, project_id: i64) -> Task {
    Task {
        id,
        name: format!("Task {id}"),
        project_id,
        workspace_id: 12345,
        active: true,
        estimated_seconds: None,
        tracked_seconds: None,
    }
}

pub fn client(id: i64, archived: bool) -> Client {
    Client {
        id,
        name: format!("Client {id}"),
        workspace_id: 12345,
        archived,
        notes: None,
        external_reference: None,
    }
}

pub fn project_user(id: i64, project_id: i64, user_id: i64) -> ProjectUser {
    ProjectUser {
        id,
        user_id,
        project_id,
        workspace_id: 12345,
        manager: false,
        rate: None,
        labor_cost: None,
    }
}
