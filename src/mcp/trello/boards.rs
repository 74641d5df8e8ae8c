//! Board and list tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::envelope::{ToolError, listing, render};
use crate::trello::TrelloApi;

use super::TrelloMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BoardIdParams {
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

impl<A: TrelloApi + 'static> TrelloMcpServer<A> {
    pub(super) fn board_tools() -> ToolRouter<Self> {
        Self::board_router()
    }
}

#[tool_router(router = board_router)]
impl<A: TrelloApi + 'static> TrelloMcpServer<A> {
    #[tool(
        name = "trello_get_boards",
        description = "List all accessible Trello boards"
    )]
    pub async fn get_boards(&self) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .boards
            .boards()
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("trello_get_boards", outcome)
    }

    #[tool(
        name = "trello_get_lists",
        description = "Get all lists in a Trello board, in board order"
    )]
    pub async fn get_lists(
        &self,
        Parameters(params): Parameters<BoardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .services
            .boards
            .lists(&params.board_id)
            .await
            .map(listing)
            .map_err(ToolError::from);
        render("trello_get_lists", outcome)
    }
}
