use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoodieBucksError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("DynamoDB error: {0}")]
    DynamoDb(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

pub type Result<T> = std::result::Result<T, FoodieBucksError>;
