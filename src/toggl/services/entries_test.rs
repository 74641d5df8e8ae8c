use std::sync::Arc;

use crate::error::ServiceError;
use crate::toggl::client::MockTogglApi;
use crate::toggl::fixtures::entry;
use crate::toggl::resolver::WorkspaceResolver;
use crate::toggl::services::{EntryChanges, EntryDraft, EntryService};

fn draft(duration_minutes: i64, start_time: &str) -> EntryDraft {
    EntryDraft {
        description: "Pairing".to_string(),
        start_time: start_time.to_string(),
        duration_minutes,
        project_id: Some(3001),
        task_id: Some(4001),
        tags: vec!["pair".to_string()],
        billable: true,
    }
}

#[tokio::test]
async fn test_create_converts_minutes_to_seconds() {
    let mut api = MockTogglApi::new();
    api.expect_create_time_entry()
        .withf(|ws, e| *ws == 12345 && e.duration == 5400 && e.task_id == Some(4001))
        .times(1)
        .returning(|_, _| Ok(entry(1, 5400, Some(3001))));

    let service = EntryService::new(Arc::new(api), WorkspaceResolver::Configured(12345));
    let created = service
        .create(draft(90, "2024-01-01T10:00:00Z"))
        .await
        .unwrap();
    assert_eq!(created.duration, 5400);
}

#[tokio::test]
async fn test_create_rejects_bad_timestamp_before_network() {
    let mut api = MockTogglApi::new();
    api.expect_get_workspaces().never();
    api.expect_create_time_entry().never();

    let service = EntryService::new(Arc::new(api), WorkspaceResolver::FirstAvailable);
    let err = service.create(draft(30, "not-a-date")).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_create_rejects_negative_minutes() {
    let api = MockTogglApi::new();
    let service = EntryService::new(Arc::new(api), WorkspaceResolver::Configured(1));
    let err = service
        .create(draft(-10, "2024-01-01T10:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_create_without_workspace_is_precondition() {
    let mut api = MockTogglApi::new();
    api.expect_get_workspaces().returning(|| Ok(vec![]));
    api.expect_create_time_entry().never();

    let service = EntryService::new(Arc::new(api), WorkspaceResolver::FirstAvailable);
    let err = service
        .create(draft(30, "2024-01-01T10:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Precondition(_)));
}

#[tokio::test]
async fn test_update_only_sends_supplied_fields() {
    let mut api = MockTogglApi::new();
    api.expect_update_time_entry()
        .withf(|ws, id, u| {
            *ws == 12345
                && *id == 42
                && u.duration == Some(1800)
                && u.description.is_none()
                && u.start.is_none()
        })
        .times(1)
        .returning(|_, _, _| Ok(entry(42, 1800, None)));

    let service = EntryService::new(Arc::new(api), WorkspaceResolver::Configured(12345));
    let updated = service
        .update(
            42,
            EntryChanges {
                duration_minutes: Some(30),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.duration, 1800);
}

#[tokio::test]
async fn test_get_missing_is_none() {
    let mut api = MockTogglApi::new();
    api.expect_get_time_entry().returning(|_| Ok(None));

    let service = EntryService::new(Arc::new(api), WorkspaceResolver::Configured(1));
    assert_eq!(service.get(999).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_resolves_workspace() {
    let mut api = MockTogglApi::new();
    api.expect_delete_time_entry()
        .withf(|ws, id| *ws == 12345 && *id == 42)
        .returning(|_, _| Ok(true));

    let service = EntryService::new(Arc::new(api), WorkspaceResolver::Configured(12345));
    assert!(service.delete(42).await.unwrap());
}
