//! Tests for client tools

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

use crate::mcp::toggl::{ClientIdParams, RestoreClientParams, TogglMcpServer};
use crate::toggl::WorkspaceResolver;
use crate::toggl::client::MockTogglApi;
use crate::toggl::fixtures::client;
use crate::toggl::requests::ClientRestore;

fn body(result: &CallToolResult) -> Value {
    let text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(text).unwrap()
}

fn server(api: MockTogglApi) -> TogglMcpServer<MockTogglApi> {
    TogglMcpServer::new(Arc::new(api), WorkspaceResolver::Configured(12345))
}

#[tokio::test]
async fn test_archive_reports_affected_projects() {
    let mut api = MockTogglApi::new();
    api.expect_archive_client()
        .withf(|ws, id| *ws == 12345 && *id == 5)
        .times(1)
        .returning(|_, _| Ok(vec![111, 222]));

    let result = server(api)
        .archive_client(Parameters(ClientIdParams { client_id: 5 }))
        .await
        .unwrap();
    let body = body(&result);
    assert_eq!(body["success"], true);
    assert_eq!(body["archived_project_ids"], json!([111, 222]));
}

#[tokio::test]
async fn test_restore_all_wins_over_explicit_ids() {
    let mut api = MockTogglApi::new();
    api.expect_restore_client()
        .withf(|_, id, restore| {
            *id == 5
                && matches!(
                    restore,
                    ClientRestore::AllProjects {
                        restore_all_projects: true
                    }
                )
        })
        .times(1)
        .returning(|_, _, _| Ok(client(5, false)));

    let result = server(api)
        .restore_client(Parameters(RestoreClientParams {
            client_id: 5,
            restore_all_projects: true,
            project_ids: Some(vec![1, 2]),
        }))
        .await
        .unwrap();
    assert_ne!(result.is_error, Some(true));
    assert_eq!(body(&result)["archived"], false);
}

#[tokio::test]
async fn test_restore_with_explicit_ids() {
    let mut api = MockTogglApi::new();
    api.expect_restore_client()
        .withf(|_, _, restore| {
            matches!(restore, ClientRestore::Projects { projects } if *projects == [1, 2])
        })
        .times(1)
        .returning(|_, _, _| Ok(client(5, false)));

    let result = server(api)
        .restore_client(Parameters(RestoreClientParams {
            client_id: 5,
            restore_all_projects: false,
            project_ids: Some(vec![1, 2]),
        }))
        .await
        .unwrap();
    assert_ne!(result.is_error, Some(true));
}

#[tokio::test]
async fn test_missing_client_renders_not_found() {
    let mut api = MockTogglApi::new();
    api.expect_get_client().returning(|_, _| Ok(None));

    let result = server(api)
        .get_client(Parameters(ClientIdParams { client_id: 9 }))
        .await
        .unwrap();
    assert_eq!(body(&result), json!({"error": "Client not found"}));
}
