//! Card tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::envelope::{ToolError, deleted, found, listing, render};
use crate::serde_utils::{Patch, double_option};
use crate::trello::TrelloApi;
use crate::trello::services::{CardChanges, CardDraft};

use super::TrelloMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCardParams {
    #[schemars(
        description = "Board ID the list belongs to (informational; the list determines placement)"
    )]
    pub board_id: Option<String>,
    #[schemars(description = "List ID to add the card to (alphanumeric Trello id)")]
    pub list_id: String,
    #[schemars(description = "Card title")]
    pub title: String,
    #[schemars(description = "Card description")]
    pub description: Option<String>,
    #[schemars(
        description = "Due date in ISO 8601 format (e.g. \"2024-12-31T23:59:59Z\"). \"null\" is the same as leaving it out."
    )]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CardIdParams {
    #[schemars(description = "Card ID (alphanumeric Trello id or short link)")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCardsParams {
    #[schemars(description = "Board ID")]
    pub board_id: String,
    #[schemars(description = "Only cards in this list")]
    pub list_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCardParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schemars(
        with = "Option<String>",
        description = "New due date in ISO 8601 format; \"null\" or null removes it"
    )]
    pub due_date: Option<Option<String>>,
    #[schemars(description = "List ID to move the card to")]
    pub list_id: Option<String>,
    #[schemars(description = "Archive (true) or unarchive (false) the card")]
    pub closed: Option<bool>,
}

impl<A: TrelloApi + 'static> TrelloMcpServer<A> {
    pub(super) fn card_tools() -> ToolRouter<Self> {
        Self::card_router()
    }
}

#[tool_router(router = card_router)]
impl<A: TrelloApi + 'static> TrelloMcpServer<A> {
    #[tool(name = "trello_create_card", description = "Create a new Trello card")]
    pub async fn create_card(
        &self,
        Parameters(params): Parameters<CreateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(board_id = ?params.board_id, list_id = %params.list_id, "creating card");
        let draft = CardDraft {
            list_id: params.list_id,
            title: params.title,
            description: params.description,
            due_date: params.due_date,
        };
        let outcome = self
            .services
            .cards
            .create(draft)
            .await
            .map_err(ToolError::from);
        render("trello_create_card", outcome)
    }

    #[tool(name = "trello_get_card", description = "Get a Trello card by ID")]
    pub async fn get_card(
        &self,
        Parameters(params): Parameters<CardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .cards
            .get(&params.card_id)
            .await
            .map_err(ToolError::from)
            .and_then(|card| found(card, "Card not found"));
        render("trello_get_card", outcome)
    }

    #[tool(
        name = "trello_list_cards",
        description = "List cards on a board, or in one list of it, in position order"
    )]
    pub async fn list_cards(
        &self,
        Parameters(params): Parameters<ListCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .cards
            .list(&params.board_id, params.list_id.as_deref())
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("trello_list_cards", outcome)
    }

    #[tool(
        name = "trello_update_card",
        description = "Update a Trello card. Only the supplied fields change; due_date \"null\" removes the due date."
    )]
    pub async fn update_card(
        &self,
        Parameters(params): Parameters<UpdateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let changes = CardChanges {
            title: params.title,
            description: params.description,
            due_date: Patch::from(params.due_date),
            list_id: params.list_id,
            closed: params.closed,
        };
        let outcome = self
            .services
            .cards
            .update(&params.card_id, changes)
            .await
            .map_err(ToolError::from);
        render("trello_update_card", outcome)
    }

    #[tool(name = "trello_delete_card", description = "Delete a Trello card")]
    pub async fn delete_card(
        &self,
        Parameters(params): Parameters<CardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .cards
            .delete(&params.card_id)
            .await
            .map(|ok| deleted(ok, "Card", &params.card_id))
            .map_err(ToolError::from);
        render("trello_delete_card", outcome)
    }
}
