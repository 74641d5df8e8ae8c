//! Board and card services.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{ServiceError, ServiceResult};
use crate::serde_utils::Patch;

use super::client::TrelloApi;
use super::models::{Board, Card, List};
use super::requests::{CardUpdate, NewCard};

fn by_position<T>(items: &mut [T], pos: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| pos(a).total_cmp(&pos(b)));
}

/// Trello ids and short links are plain alphanumerics.
pub fn trello_id<'a>(field: &str, value: &'a str) -> ServiceResult<&'a str> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(value)
    } else {
        Err(ServiceError::InvalidArgument(format!(
            "{field} must be an alphanumeric Trello id (got {value:?})"
        )))
    }
}

/// Parse a caller due date. The literal `"null"` (any case) means "clear".
pub fn parse_due_date(value: &str) -> ServiceResult<Patch<DateTime<Utc>>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("null") {
        return Ok(Patch::Null);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|ts| Patch::Value(ts.with_timezone(&Utc)))
        .map_err(|e| {
            ServiceError::InvalidArgument(format!(
                "due_date is not a valid ISO 8601 timestamp: {e}"
            ))
        })
}

pub struct BoardService<A> {
    api: Arc<A>,
}

impl<A: TrelloApi> BoardService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn boards(&self) -> ServiceResult<Vec<Board>> {
        Ok(self.api.get_boards().await?)
    }

    /// Lists of a board, leftmost first.
    pub async fn lists(&self, board_id: &str) -> ServiceResult<Vec<List>> {
        let board_id = trello_id("board_id", board_id)?;
        let mut lists = self.api.get_lists(board_id).await?;
        by_position(&mut lists, |l| l.pos);
        Ok(lists)
    }
}

#[derive(Debug, Clone)]
pub struct CardDraft {
    pub list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CardChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Null` clears the due date.
    pub due_date: Patch<String>,
    /// Move to this list.
    pub list_id: Option<String>,
    /// Archive (`true`) or unarchive (`false`).
    pub closed: Option<bool>,
}

pub struct CardService<A> {
    api: Arc<A>,
}

impl<A: TrelloApi> CardService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// A due date of `"null"` on create is the same as no due date.
    pub async fn create(&self, draft: CardDraft) -> ServiceResult<Card> {
        trello_id("list_id", &draft.list_id)?;
        let due = match draft.due_date.as_deref() {
            Some(raw) => match parse_due_date(raw)? {
                Patch::Value(ts) => Some(ts),
                Patch::Null | Patch::Unset => None,
            },
            None => None,
        };
        let card = NewCard {
            list_id: draft.list_id,
            name: draft.title,
            desc: draft.description,
            due,
        };
        Ok(self.api.create_card(&card).await?)
    }

    pub async fn get(&self, card_id: &str) -> ServiceResult<Option<Card>> {
        let card_id = trello_id("card_id", card_id)?;
        Ok(self.api.get_card(card_id).await?)
    }

    /// Cards of a list when given, otherwise of the whole board; by position.
    pub async fn list(&self, board_id: &str, list_id: Option<&str>) -> ServiceResult<Vec<Card>> {
        let board_id = trello_id("board_id", board_id)?;
        let mut cards = match list_id {
            Some(list_id) => {
                let list_id = trello_id("list_id", list_id)?;
                self.api.get_list_cards(list_id).await?
            }
            None => self.api.get_board_cards(board_id).await?,
        };
        by_position(&mut cards, |c| c.pos);
        Ok(cards)
    }

    pub async fn update(&self, card_id: &str, changes: CardChanges) -> ServiceResult<Card> {
        let card_id = trello_id("card_id", card_id)?;
        if let Some(list_id) = &changes.list_id {
            trello_id("list_id", list_id)?;
        }
        let due = match changes.due_date {
            Patch::Unset => Patch::Unset,
            Patch::Null => Patch::Null,
            Patch::Value(raw) => parse_due_date(&raw)?,
        };
        let update = CardUpdate {
            name: changes.title,
            desc: changes.description,
            due,
            list_id: changes.list_id,
            closed: changes.closed,
        };
        Ok(self.api.update_card(card_id, &update).await?)
    }

    pub async fn delete(&self, card_id: &str) -> ServiceResult<bool> {
        let card_id = trello_id("card_id", card_id)?;
        Ok(self.api.delete_card(card_id).await?)
    }
}

/// Both Trello services, sharing one client.
pub struct TrelloServices<A> {
    pub boards: BoardService<A>,
    pub cards: CardService<A>,
}

impl<A: TrelloApi> TrelloServices<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            boards: BoardService::new(api.clone()),
            cards: CardService::new(api),
        }
    }
}
