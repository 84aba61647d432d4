use crate::error::{FoodieBucksError, Result};

pub const DEFAULT_TABLE_NAME: &str = "dev.glennmeyer.dev-foodiebucks";
pub const DEFAULT_REGION: &str = "us-east-2";

pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const ENDPOINT_URL_VAR: &str = "DYNAMODB_ENDPOINT_URL";

/// Settings resolved once per execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table used when a request does not name one.
    pub table_name: String,
    /// Overrides the DynamoDB endpoint, e.g. `http://localhost:8000` for DynamoDB Local.
    pub endpoint_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            endpoint_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let table_name = non_blank(TABLE_NAME_VAR).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let endpoint_url = match non_blank(ENDPOINT_URL_VAR) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => Some(url),
            Some(url) => {
                return Err(FoodieBucksError::Config(format!(
                    "{ENDPOINT_URL_VAR} must be an http(s) URL, got {url:?}"
                )));
            }
            None => None,
        };

        Ok(Self {
            table_name,
            endpoint_url,
        })
    }

    /// Request value wins over the configured default.
    pub fn resolve_table<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.table_name)
    }
}
