//! HTTP client for the Trello REST API.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{self, ApiError, ApiResult, Vendor};

use super::models::{Board, Card, List};
use super::requests::{CardUpdate, NewCard};

#[cfg(test)]
use mockall::automock;

/// Trello endpoints used by the service layer. Can be mocked in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrelloApi: Send + Sync {
    async fn get_boards(&self) -> ApiResult<Vec<Board>>;
    async fn get_lists(&self, board_id: &str) -> ApiResult<Vec<List>>;
    async fn create_card(&self, card: &NewCard) -> ApiResult<Card>;
    /// `Ok(None)` on a vendor 404.
    async fn get_card(&self, card_id: &str) -> ApiResult<Option<Card>>;
    async fn update_card(&self, card_id: &str, update: &CardUpdate) -> ApiResult<Card>;
    async fn delete_card(&self, card_id: &str) -> ApiResult<bool>;
    async fn get_board_cards(&self, board_id: &str) -> ApiResult<Vec<Card>>;
    async fn get_list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>>;
}

/// Trello API client. Every request carries the `key` and `token` query
/// parameters.
///
/// Ids are appended as percent-encoded path segments, so an id can never
/// climb out of its resource path or touch the query string.
#[derive(Clone)]
pub struct TrelloClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(
        api_key: impl Into<String>,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> ApiResult<Self> {
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::ClientBuild {
                vendor: Vendor::Trello,
                message: format!("invalid base URL: {base_url}"),
            })?;
        Ok(Self {
            client: http::build_client(Vendor::Trello)?,
            base_url,
            api_key: api_key.into(),
            token: token.into(),
        })
    }

    /// Release the connection pool. Consumes the client.
    pub fn close(self) {
        tracing::debug!("closing Trello client");
        drop(self.client);
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        // credentials ride in the query string; log the path only
        tracing::debug!(%method, path = url.path(), "trello request");
        self.client
            .request(method, url)
            .query(&[("key", &self.api_key), ("token", &self.token)])
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = http::send(Vendor::Trello, request).await?;
        http::handle_response(Vendor::Trello, response).await
    }
}

#[async_trait]
impl TrelloApi for TrelloClient {
    async fn get_boards(&self) -> ApiResult<Vec<Board>> {
        self.fetch(self.request(Method::GET, &["members", "me", "boards"]))
            .await
    }

    async fn get_lists(&self, board_id: &str) -> ApiResult<Vec<List>> {
        self.fetch(self.request(Method::GET, &["boards", board_id, "lists"]))
            .await
    }

    async fn create_card(&self, card: &NewCard) -> ApiResult<Card> {
        self.fetch(self.request(Method::POST, &["cards"]).query(card))
            .await
    }

    async fn get_card(&self, card_id: &str) -> ApiResult<Option<Card>> {
        let request = self.request(Method::GET, &["cards", card_id]);
        let response = http::send(Vendor::Trello, request).await?;
        http::handle_optional(Vendor::Trello, response).await
    }

    async fn update_card(&self, card_id: &str, update: &CardUpdate) -> ApiResult<Card> {
        self.fetch(self.request(Method::PUT, &["cards", card_id]).query(update))
            .await
    }

    async fn delete_card(&self, card_id: &str) -> ApiResult<bool> {
        let request = self.request(Method::DELETE, &["cards", card_id]);
        let response = http::send(Vendor::Trello, request).await?;
        http::handle_deleted(Vendor::Trello, response).await
    }

    async fn get_board_cards(&self, board_id: &str) -> ApiResult<Vec<Card>> {
        self.fetch(self.request(Method::GET, &["boards", board_id, "cards"]))
            .await
    }

    async fn get_list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>> {
        self.fetch(self.request(Method::GET, &["lists", list_id, "cards"]))
            .await
    }
}
