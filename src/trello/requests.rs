//! Card payloads. Trello takes these as query parameters.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::serde_utils::Patch;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCard {
    #[serde(rename = "idList")]
    pub list_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_due"
    )]
    pub due: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// `Null` goes out as the literal `due=null`.
    #[serde(
        skip_serializing_if = "Patch::is_unset",
        serialize_with = "serialize_due"
    )]
    pub due: Patch<DateTime<Utc>>,
    #[serde(rename = "idList", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

fn format_due(due: &DateTime<Utc>) -> String {
    due.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_optional_due<S: Serializer>(
    due: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match due {
        Some(ts) => serializer.serialize_str(&format_due(ts)),
        None => serializer.serialize_none(),
    }
}

fn serialize_due<S: Serializer>(
    due: &Patch<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match due {
        Patch::Value(ts) => serializer.serialize_str(&format_due(ts)),
        Patch::Null | Patch::Unset => serializer.serialize_str("null"),
    }
}
