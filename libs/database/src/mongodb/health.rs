use mongodb::Client;

use super::connector::ping;
use crate::common::{DatabaseError, DatabaseResult};

/// `Ok(())` when the server answers a ping.
pub async fn check_health(client: &Client) -> DatabaseResult<()> {
    ping(client)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
