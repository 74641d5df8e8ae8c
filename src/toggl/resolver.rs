//! Default workspace resolution.

use crate::error::{ServiceError, ServiceResult};

use super::client::TogglApi;

pub const NO_WORKSPACE: &str = "No workspace available";

/// How an operation picks its workspace when the caller does not name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceResolver {
    /// Always this id, no network call.
    Configured(i64),
    /// The first workspace the vendor lists. The vendor does not document an
    /// ordering, so with several workspaces this is whatever comes first.
    FirstAvailable,
}

impl WorkspaceResolver {
    pub fn from_config(workspace_id: Option<i64>) -> Self {
        match workspace_id {
            Some(id) => WorkspaceResolver::Configured(id),
            None => WorkspaceResolver::FirstAvailable,
        }
    }

    /// Resolve, re-fetching on every call.
    pub async fn resolve<A: TogglApi + ?Sized>(&self, api: &A) -> ServiceResult<i64> {
        match self {
            WorkspaceResolver::Configured(id) => Ok(*id),
            WorkspaceResolver::FirstAvailable => api
                .get_workspaces()
                .await?
                .first()
                .map(|w| w.id)
                .ok_or_else(|| ServiceError::Precondition(NO_WORKSPACE.to_string())),
        }
    }

    /// An explicit id from the caller wins over the strategy.
    pub async fn resolve_or<A: TogglApi + ?Sized>(
        &self,
        api: &A,
        explicit: Option<i64>,
    ) -> ServiceResult<i64> {
        match explicit {
            Some(id) => Ok(id),
            None => self.resolve(api).await,
        }
    }
}
