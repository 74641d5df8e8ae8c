//! Trello records. Field names follow the vendor's camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub closed: bool,
    pub url: String,
    #[serde(default, rename = "shortUrl")]
    pub short_url: Option<String>,
}

/// A column on a board. Lower `pos` sorts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(rename = "idBoard")]
    pub board_id: String,
    pub pos: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(rename = "idList")]
    pub list_id: String,
    #[serde(rename = "idBoard")]
    pub board_id: String,
    /// Archived.
    #[serde(default)]
    pub closed: bool,
    pub url: String,
    #[serde(default, rename = "shortUrl")]
    pub short_url: Option<String>,
    pub pos: f64,
    #[serde(default, rename = "dateLastActivity")]
    pub date_last_activity: Option<DateTime<Utc>>,
}
