//! State records returned by `/cube/states`.

use serde::{Deserialize, Deserializer, Serialize};

/// State identifier used as a query filter (a FIPS code such as "37").
pub type StateID = String;

/// A state the service holds data for.
///
/// Only `id` is required. Fields this crate does not model are kept in
/// `attributes` so nothing the service sends is dropped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct State {
    #[serde(deserialize_with = "string_or_number")]
    pub id: StateID,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Accepts `"37"` and `37` alike.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
