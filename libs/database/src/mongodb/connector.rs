use mongodb::{bson::doc, options::ClientOptions, Client};
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{retry, retry_with_backoff, DatabaseError, DatabaseResult, RetryConfig};

/// Translate a [`MongoConfig`] into driver options.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client without contacting the server.
///
/// The driver connects lazily, so failures only show up on the first
/// operation, bounded by `server_selection_timeout`.
pub async fn client_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let options = client_options(config).await?;
    Ok(Client::with_options(options)?)
}

/// Build a client and verify the server answers a `ping`.
#[instrument(skip(config), fields(database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let client = client_from_config(config).await?;

    ping(&client)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff between attempts.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

/// Round-trip a `ping` command against the `admin` database.
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}
