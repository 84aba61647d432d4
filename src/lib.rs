pub mod agent;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod model;
pub mod router;

pub use agent::{DynamoAgent, ItemKey, ProfileStore};
pub use config::Config;
pub use error::{FoodieBucksError, Result};
pub use fetcher::ProfileFetcher;
pub use model::{Profile, ProfileRequest};
pub use router::function_handler;
