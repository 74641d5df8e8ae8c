//! Record builders shared by Trello tests.

use super::models::{Board, Card, List};

pub fn board(id: &str) -> Board {
    Board {
        id: id.to_string(),
        name: format!("Board {id}"),
        desc: None,
        closed: false,
        url: format!("https://trello.com/b/{id}"),
        short_url: None,
    }
}

pub fn list(id: &str, pos: f64) -> List {
    List {
        id: id.to_string(),
        name: format!("List {id}"),
        closed: false,
        board_id: "b1".to_string(),
        pos,
    }
}

pub fn card(id: &str, pos: f64) -> Card {
    Card {
        id: id.to_string(),
        name: format!("Card {id}"),
        desc: None,
        due: None,
        list_id: "l1".to_string(),
        board_id: "b1".to_string(),
        closed: false,
        url: format!("https://trello.com/c/{id}"),
        short_url: None,
        pos,
        date_last_activity: None,
    }
}
