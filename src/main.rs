use foodie_bucks::{Config, DynamoAgent, ProfileFetcher, function_handler, logging};
use lambda_http::{Error, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env()?;
    let agent = DynamoAgent::connect(&config).await;
    info!(table = %config.table_name, "foodie bucks profile function ready");

    let fetcher = ProfileFetcher::new(agent, config);
    run(service_fn(|event| function_handler(&fetcher, event))).await
}
