use crate::error::{FoodieBucksError, Result};
use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of an inbound profile request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub pk: String,
    pub sk: String,
    #[serde(rename = "tableName", default)]
    pub table_name: Option<String>,
}

impl ProfileRequest {
    pub fn from_body(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| FoodieBucksError::InvalidBody(e.to_string()))
    }

    /// Caller supplied table, if any. Blank names count as absent.
    pub fn table_override(&self) -> Option<&str> {
        self.table_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A `USER#` / `PROFILE#` record. The same field names are used in the
/// table and in the JSON response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "pk")]
    pub partition_key: String,
    #[serde(rename = "sk")]
    pub sort_key: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "foodieBucksAvailable")]
    pub bucks_available: i64,
    #[serde(rename = "foodieBucksUsed")]
    pub bucks_used: i64,
    #[serde(rename = "foodieBuckIncrement")]
    pub bucks_increment: i64,
}

impl Profile {
    /// Strict mapping of a stored item. Missing attributes are zero valued,
    /// attributes of the wrong type are an error.
    pub fn from_item(item: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(item))
            .map_err(|e| FoodieBucksError::Deserialization(e.to_string()))
    }

    /// Keeps every field that has the expected type and leaves the rest at
    /// their zero value.
    pub fn salvage(item: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            item.get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_default()
        };
        let number = |key: &str| item.get(key).and_then(Value::as_i64).unwrap_or_default();

        Profile {
            partition_key: text("pk"),
            sort_key: text("sk"),
            display_name: text("displayName"),
            bucks_available: number("foodieBucksAvailable"),
            bucks_used: number("foodieBucksUsed"),
            bucks_increment: number("foodieBuckIncrement"),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FoodieBucksError::Serialization(e.to_string()))
    }
}
