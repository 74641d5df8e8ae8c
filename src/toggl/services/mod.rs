//! Toggl service layer: default resolution and unit adaptation on top of
//! [`TogglApi`](super::client::TogglApi).

pub mod analytics;
pub mod clients;
pub mod entries;
pub mod project_users;
pub mod projects;
pub mod tasks;
pub mod timer;
pub mod units;
pub mod workspaces;

#[cfg(test)]
mod entries_test;

use std::sync::Arc;

pub use analytics::{AnalyticsService, TimeSummary, summarize};
pub use clients::ClientService;
pub use entries::{EntryChanges, EntryDraft, EntryService};
pub use project_users::ProjectUserService;
pub use projects::ProjectService;
pub use tasks::{SkippedProject, TaskListing, TaskService};
pub use timer::{StartTimer, TimerService};
pub use workspaces::WorkspaceService;

use super::client::TogglApi;
use super::resolver::WorkspaceResolver;

/// Every Toggl service, sharing one client.
pub struct TogglServices<A> {
    pub timer: TimerService<A>,
    pub entries: EntryService<A>,
    pub analytics: AnalyticsService<A>,
    pub workspaces: WorkspaceService<A>,
    pub projects: ProjectService<A>,
    pub tasks: TaskService<A>,
    pub clients: ClientService<A>,
    pub project_users: ProjectUserService<A>,
}

impl<A: TogglApi> TogglServices<A> {
    pub fn new(api: Arc<A>, workspace: WorkspaceResolver) -> Self {
        Self {
            timer: TimerService::new(api.clone(), workspace),
            entries: EntryService::new(api.clone(), workspace),
            analytics: AnalyticsService::new(api.clone()),
            workspaces: WorkspaceService::new(api.clone(), workspace),
            projects: ProjectService::new(api.clone(), workspace),
            tasks: TaskService::new(api.clone(), workspace),
            clients: ClientService::new(api.clone(), workspace),
            project_users: ProjectUserService::new(api, workspace),
        }
    }
}
