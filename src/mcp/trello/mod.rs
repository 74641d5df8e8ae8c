//! Trello MCP server.

mod boards;
mod cards;

#[cfg(test)]
mod cards_test;

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::trello::{TrelloApi, TrelloServices};

pub use boards::BoardIdParams;
pub use cards::{CardIdParams, CreateCardParams, ListCardsParams, UpdateCardParams};

/// Trello MCP server, generic over the API seam so tests can mock the vendor.
pub struct TrelloMcpServer<A: TrelloApi> {
    services: Arc<TrelloServices<A>>,
    tool_router: ToolRouter<Self>,
}

impl<A: TrelloApi + 'static> TrelloMcpServer<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::from_services(Arc::new(TrelloServices::new(api)))
    }

    fn from_services(services: Arc<TrelloServices<A>>) -> Self {
        Self {
            services,
            tool_router: Self::board_tools() + Self::card_tools(),
        }
    }

    pub(crate) fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

impl<A: TrelloApi + 'static> Clone for TrelloMcpServer<A> {
    fn clone(&self) -> Self {
        Self::from_services(Arc::clone(&self.services))
    }
}

#[tool_handler(router = self.tool_router)]
impl<A: TrelloApi + 'static> ServerHandler for TrelloMcpServer<A> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Trello card management. List boards and their lists, then create, read, \
                 update, move, archive and delete cards. Due dates are ISO 8601; pass \
                 \"null\" to clear one.",
        )
    }
}
