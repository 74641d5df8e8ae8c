//! Tests for Trello card tools

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

use crate::mcp::trello::{
    BoardIdParams, CardIdParams, CreateCardParams, ListCardsParams, TrelloMcpServer,
    UpdateCardParams,
};
use crate::serde_utils::Patch;
use crate::trello::client::MockTrelloApi;
use crate::trello::fixtures::{card, list};

fn body(result: &CallToolResult) -> Value {
    let text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(text).unwrap()
}

fn server(api: MockTrelloApi) -> TrelloMcpServer<MockTrelloApi> {
    TrelloMcpServer::new(Arc::new(api))
}

#[test]
fn test_update_params_distinguish_null_from_missing() {
    let missing: UpdateCardParams = serde_json::from_value(json!({"card_id": "c1"})).unwrap();
    let null: UpdateCardParams =
        serde_json::from_value(json!({"card_id": "c1", "due_date": null})).unwrap();

    assert_eq!(missing.due_date, None);
    assert_eq!(null.due_date, Some(None));
}

#[tokio::test]
async fn test_update_with_null_string_clears_due() {
    let mut api = MockTrelloApi::new();
    api.expect_update_card()
        .withf(|id, u| id == "c1" && u.due == Patch::Null)
        .times(1)
        .returning(|_, _| Ok(card("c1", 1.0)));

    let params = UpdateCardParams {
        card_id: "c1".to_string(),
        title: None,
        description: None,
        due_date: Some(Some("NULL".to_string())),
        list_id: None,
        closed: None,
    };
    let result = server(api).update_card(Parameters(params)).await.unwrap();
    assert_ne!(result.is_error, Some(true));
    assert_eq!(body(&result)["due"], Value::Null);
}

#[tokio::test]
async fn test_update_with_json_null_clears_due() {
    let mut api = MockTrelloApi::new();
    api.expect_update_card()
        .withf(|_, u| u.due == Patch::Null)
        .times(1)
        .returning(|_, _| Ok(card("c1", 1.0)));

    let params: UpdateCardParams =
        serde_json::from_value(json!({"card_id": "c1", "due_date": null})).unwrap();
    let result = server(api).update_card(Parameters(params)).await.unwrap();
    assert_ne!(result.is_error, Some(true));
}

#[tokio::test]
async fn test_update_with_bad_due_is_invalid_argument() {
    let mut api = MockTrelloApi::new();
    api.expect_update_card().never();

    let params: UpdateCardParams =
        serde_json::from_value(json!({"card_id": "c1", "due_date": "next tuesday"})).unwrap();
    let result = server(api).update_card(Parameters(params)).await.unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(
        body(&result)["error"]
            .as_str()
            .unwrap()
            .contains("due_date")
    );
}

#[tokio::test]
async fn test_create_card_maps_title_and_list() {
    let mut api = MockTrelloApi::new();
    api.expect_create_card()
        .withf(|c| c.name == "Ship it" && c.list_id == "l1" && c.desc.as_deref() == Some("now"))
        .times(1)
        .returning(|_| Ok(card("c9", 1.0)));

    let params = CreateCardParams {
        board_id: Some("b1".to_string()),
        list_id: "l1".to_string(),
        title: "Ship it".to_string(),
        description: Some("now".to_string()),
        due_date: None,
    };
    let result = server(api).create_card(Parameters(params)).await.unwrap();
    assert_eq!(body(&result)["id"], "c9");
}

#[tokio::test]
async fn test_missing_card_renders_not_found() {
    let mut api = MockTrelloApi::new();
    api.expect_get_card().returning(|_| Ok(None));

    let result = server(api)
        .get_card(Parameters(CardIdParams {
            card_id: "nope".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert_eq!(body(&result), json!({"error": "Card not found"}));
}

#[tokio::test]
async fn test_delete_renders_success_message() {
    let mut api = MockTrelloApi::new();
    api.expect_delete_card().returning(|_| Ok(true));

    let result = server(api)
        .delete_card(Parameters(CardIdParams {
            card_id: "c1".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(
        body(&result),
        json!({"success": true, "message": "Card c1 deleted successfully"})
    );
}

#[tokio::test]
async fn test_list_cards_in_position_order() {
    let mut api = MockTrelloApi::new();
    api.expect_get_list_cards()
        .withf(|id| id == "l1")
        .returning(|_| Ok(vec![card("c2", 20.0), card("c1", 10.0)]));
    api.expect_get_board_cards().never();

    let result = server(api)
        .list_cards(Parameters(ListCardsParams {
            board_id: "b1".to_string(),
            list_id: Some("l1".to_string()),
        }))
        .await
        .unwrap();
    let body = body(&result);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["id"], "c1");
}

#[tokio::test]
async fn test_get_lists_in_board_order() {
    let mut api = MockTrelloApi::new();
    api.expect_get_lists()
        .returning(|_| Ok(vec![list("l2", 2.0), list("l1", 1.0)]));

    let result = server(api)
        .get_lists(Parameters(BoardIdParams {
            board_id: "b1".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(body(&result)["items"][0]["id"], "l1");
}

#[tokio::test]
async fn test_delete_rejects_path_like_card_id() {
    let mut api = MockTrelloApi::new();
    api.expect_delete_card().never();

    let result = server(api)
        .delete_card(Parameters(CardIdParams {
            card_id: "../boards/b1".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(
        body(&result)["error"]
            .as_str()
            .unwrap()
            .starts_with("card_id must be an alphanumeric Trello id")
    );
}

#[tokio::test]
async fn test_create_with_null_due_is_accepted() {
    let mut api = MockTrelloApi::new();
    api.expect_create_card()
        .withf(|c| c.due.is_none())
        .times(1)
        .returning(|_| Ok(card("c9", 1.0)));

    let params: CreateCardParams = serde_json::from_value(json!({
        "list_id": "l1",
        "title": "Ship it",
        "due_date": "null"
    }))
    .unwrap();
    let result = server(api).create_card(Parameters(params)).await.unwrap();
    assert_ne!(result.is_error, Some(true));
}
