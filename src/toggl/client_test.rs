//! Tests for the Toggl HTTP client against a mock vendor.

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::http::ApiError;
use crate::serde_utils::Patch;
use crate::toggl::client::{TogglApi, TogglClient};
use crate::toggl::requests::{
    ClientFilter, ClientRestore, ClientStatus, NewProjectUser, NewTimeEntry, ProjectUpdate,
    ProjectUserUpdate, RateChangeMode,
};

async fn setup() -> (MockServer, TogglClient) {
    let server = MockServer::start().await;
    let client = TogglClient::new("test-token", server.uri()).unwrap();
    (server, client)
}

fn entry_json(id: i64, duration: i64, stop: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "description": "Writing tests",
        "start": "2024-01-01T10:00:00Z",
        "stop": stop,
        "duration": duration,
        "project_id": 3001,
        "task_id": null,
        "workspace_id": 12345,
        "wid": 12345,
        "tags": null,
        "billable": null
    })
}

#[tokio::test]
async fn test_get_current_user_uses_basic_auth() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(basic_auth("test-token", "api_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "dev@example.com",
            "fullname": "Dev Eloper",
            "default_workspace_id": 12345,
            "timezone": "Europe/Berlin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.get_current_user().await.unwrap();
    assert_eq!(user.email, "dev@example.com");
    assert_eq!(user.default_workspace_id, Some(12345));
}

#[tokio::test]
async fn test_get_workspaces() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/workspaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "W1", "organization_id": 10},
            {"id": 2, "name": "W2", "organization_id": 10}
        ])))
        .mount(&server)
        .await;

    let workspaces = client.get_workspaces().await.unwrap();
    assert_eq!(workspaces.len(), 2);
    assert_eq!(workspaces[0].name, "W1");
}

#[tokio::test]
async fn test_time_entry_running_state_follows_duration() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me/time_entries"))
        .and(query_param("start_date", "2024-01-01T00:00:00Z"))
        .and(query_param("end_date", "2024-01-08T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            entry_json(1, 3600, Some("2024-01-01T11:00:00Z")),
            entry_json(2, -1, None)
        ])))
        .mount(&server)
        .await;

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
    let entries = client.get_time_entries(start, end).await.unwrap();

    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.is_running(), entry.stop.is_none());
    }
    assert!(entries[1].is_running());
    // vendor nulls normalize
    assert!(entries[0].tags.is_empty());
    assert!(!entries[0].billable);
}

#[tokio::test]
async fn test_current_entry_null_body_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me/time_entries/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    assert_eq!(client.get_current_time_entry().await.unwrap(), None);
}

#[tokio::test]
async fn test_current_entry_empty_body_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me/time_entries/current"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert_eq!(client.get_current_time_entry().await.unwrap(), None);
}

#[tokio::test]
async fn test_current_entry_running() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me/time_entries/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json(7, -1, None)))
        .mount(&server)
        .await;

    let entry = client.get_current_time_entry().await.unwrap().unwrap();
    assert_eq!(entry.id, 7);
    assert!(entry.is_running());
}

#[tokio::test]
async fn test_get_time_entry_404_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me/time_entries/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    assert_eq!(client.get_time_entry(999).await.unwrap(), None);
}

#[tokio::test]
async fn test_non_2xx_propagates_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("Incorrect username and/or password"),
        )
        .mount(&server)
        .await;

    let err = client.get_current_user().await.unwrap_err();
    match err {
        ApiError::Http { status, body, .. } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Incorrect username and/or password");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_by_id_non_404_error_propagates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/workspaces/12345/projects/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.get_project(12345, 1).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_invalid_body_is_invalid_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/workspaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client.get_workspaces().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_create_time_entry_sends_created_with() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/workspaces/12345/time_entries"))
        .and(body_json(json!({
            "description": "Review",
            "start": "2024-01-01T10:00:00Z",
            "duration": 5400,
            "project_id": 3001,
            "tags": ["review"],
            "billable": true,
            "workspace_id": 12345,
            "created_with": "app-vitals-mcp"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json(
            42,
            5400,
            Some("2024-01-01T11:30:00Z"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let entry = NewTimeEntry {
        description: "Review".to_string(),
        start: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        duration: 5400,
        project_id: Some(3001),
        task_id: None,
        tags: vec!["review".to_string()],
        billable: true,
    };
    let created = client.create_time_entry(12345, &entry).await.unwrap();
    assert_eq!(created.id, 42);
}

#[tokio::test]
async fn test_stop_time_entry_patches() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/workspaces/12345/time_entries/7/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json(
            7,
            1200,
            Some("2024-01-01T10:20:00Z"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let entry = client.stop_time_entry(12345, 7).await.unwrap();
    assert!(!entry.is_running());
}

#[tokio::test]
async fn test_delete_status_codes() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/workspaces/12345/time_entries/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/workspaces/12345/time_entries/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/workspaces/12345/time_entries/3"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/workspaces/12345/time_entries/4"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    assert!(client.delete_time_entry(12345, 1).await.unwrap());
    assert!(client.delete_time_entry(12345, 2).await.unwrap());
    assert!(!client.delete_time_entry(12345, 3).await.unwrap());
    assert_eq!(
        client
            .delete_time_entry(12345, 4)
            .await
            .unwrap_err()
            .status(),
        Some(404)
    );
}

#[tokio::test]
async fn test_update_project_clears_client() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/workspaces/12345/projects/3001"))
        .and(body_json(json!({"client_id": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3001,
            "name": "Website",
            "workspace_id": 12345,
            "client_id": null,
            "active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProjectUpdate {
        client_id: Patch::Null,
        ..Default::default()
    };
    let project = client.update_project(12345, 3001, &update).await.unwrap();
    assert_eq!(project.client_id, None);
    assert_eq!(project.color, "#3750b5");
}

#[tokio::test]
async fn test_get_tasks_forwards_active_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/workspaces/12345/projects/3001/tasks"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Design", "project_id": 3001, "workspace_id": 12345, "estimated_seconds": 7200}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client.get_tasks(12345, 3001, Some(true)).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].active);
    assert_eq!(tasks[0].estimated_seconds, Some(7200));
}

#[tokio::test]
async fn test_get_clients_with_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/workspaces/12345/clients"))
        .and(query_param("status", "active"))
        .and(query_param("name", "Acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2001, "name": "Acme Corp", "wid": 12345, "archived": false, "notes": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ClientFilter {
        status: Some(ClientStatus::Active),
        name: Some("Acme".to_string()),
    };
    let clients = client.get_clients(12345, &filter).await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].workspace_id, 12345);
}

#[tokio::test]
async fn test_archive_client_returns_project_ids() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/workspaces/12345/clients/2001/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([111, 222])))
        .mount(&server)
        .await;

    assert_eq!(
        client.archive_client(12345, 2001).await.unwrap(),
        vec![111, 222]
    );
}

#[tokio::test]
async fn test_restore_client_all_projects() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/workspaces/12345/clients/2001/restore"))
        .and(body_json(json!({"restore_all_projects": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2001,
            "name": "Restored Client",
            "wid": 12345,
            "archived": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let restored = client
        .restore_client(
            12345,
            2001,
            &ClientRestore::AllProjects {
                restore_all_projects: true,
            },
        )
        .await
        .unwrap();
    assert!(!restored.archived);
}

#[tokio::test]
async fn test_add_project_user_includes_workspace() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/workspaces/12345/project_users"))
        .and(body_json(json!({
            "project_id": 3001,
            "user_id": 1001,
            "manager": true,
            "rate": 75.0,
            "workspace_id": 12345
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5001,
            "user_id": 1001,
            "project_id": 3001,
            "workspace_id": 12345,
            "manager": true,
            "rate": 75.0,
            "labor_cost": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let member = NewProjectUser {
        project_id: 3001,
        user_id: 1001,
        manager: true,
        rate: Some(75.0),
        labor_cost: None,
    };
    let added = client.add_project_user(12345, &member).await.unwrap();
    assert_eq!(added.id, 5001);
    assert_eq!(added.rate, Some(75.0));
}

#[tokio::test]
async fn test_update_project_user_sends_change_mode() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/workspaces/12345/project_users/5001"))
        .and(body_json(json!({
            "rate": 100.0,
            "rate_change_mode": "override-all"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5001,
            "user_id": 1001,
            "project_id": 3001,
            "workspace_id": 12345,
            "manager": false,
            "rate": 100.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProjectUserUpdate {
        rate: Some(100.0),
        rate_change_mode: Some(RateChangeMode::OverrideAll),
        ..Default::default()
    };
    let updated = client
        .update_project_user(12345, 5001, &update)
        .await
        .unwrap();
    assert_eq!(updated.rate, Some(100.0));
}

#[tokio::test]
async fn test_close_consumes_client() {
    let (_server, client) = setup().await;
    client.close();
}
