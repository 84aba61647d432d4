use crate::config::{Config, DEFAULT_REGION};
use crate::error::{FoodieBucksError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Composite primary key of a stored item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub pk: String,
    pub sk: String,
}

impl ItemKey {
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }
}

/// Point lookups against a key-value table. Items come back as JSON objects.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_item(&self, table_name: &str, key: &ItemKey) -> Result<Option<Map<String, Value>>>;
}

pub struct DynamoAgent {
    pub client: Client,
}

impl DynamoAgent {
    /// Builds the client from the default credential chain. The region comes
    /// from the environment, falling back to `us-east-2`.
    pub async fn connect(config: &Config) -> Self {
        let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&shared_config);
        if let Some(url) = &config.endpoint_url {
            debug!(endpoint = %url, "using DynamoDB endpoint override");
            dynamo_config = dynamo_config.endpoint_url(url);
        }

        Self {
            client: Client::from_conf(dynamo_config.build()),
        }
    }
}

#[async_trait]
impl ProfileStore for DynamoAgent {
    async fn get_item(&self, table_name: &str, key: &ItemKey) -> Result<Option<Map<String, Value>>> {
        let mut key_map = HashMap::new();
        key_map.insert("pk".to_string(), AttributeValue::S(key.pk.clone()));
        key_map.insert("sk".to_string(), AttributeValue::S(key.sk.clone()));

        let output = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key_map))
            .send()
            .await
            .map_err(|e| FoodieBucksError::DynamoDb(DisplayErrorContext(&e).to_string()))?;

        Ok(output.item.map(item_to_json))
    }
}

/// Converts a raw item, dropping attributes with no JSON counterpart.
pub fn item_to_json(item: HashMap<String, AttributeValue>) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in item {
        match av_to_json_value(&v) {
            Ok(value) => {
                map.insert(k, value);
            }
            Err(e) => warn!(attribute = %k, error = %e, "skipping attribute"),
        }
    }
    map
}

pub fn av_to_json_value(av: &AttributeValue) -> Result<Value> {
    match av {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => Ok(number_to_json(n)),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Ss(set) => Ok(Value::Array(
            set.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(set) => Ok(Value::Array(
            set.iter().map(|n| number_to_json(n)).collect(),
        )),
        AttributeValue::L(lst) => {
            let mut vals = vec![];
            for v in lst {
                vals.push(av_to_json_value(v)?);
            }
            Ok(Value::Array(vals))
        }
        AttributeValue::M(map) => {
            let mut json_map = Map::new();
            for (k, v) in map {
                json_map.insert(k.clone(), av_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        _ => Err(FoodieBucksError::Deserialization(
            "Unsupported AttributeValue".to_string(),
        )),
    }
}

// DynamoDB numbers are strings on the wire.
fn number_to_json(n: &str) -> Value {
    if let Ok(i) = n.parse::<i64>() {
        return Value::Number(i.into());
    }
    n.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}
